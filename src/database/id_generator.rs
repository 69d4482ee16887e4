use chrono::Utc;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IdKind {
    Post,
    Comment,
    Reply,
}

/// Millisecond-stamped ids, `<kind>_<millis>`. Stamps never repeat within one generator:
/// when the clock has not moved past the last stamp, the next stamp is last + 1.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_stamp: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, kind: IdKind) -> String {
        self.next_id_at(kind, Utc::now().timestamp_millis())
    }

    fn next_id_at(&mut self, kind: IdKind, now_millis: i64) -> String {
        let stamp = now_millis.max(self.last_stamp + 1);
        self.last_stamp = stamp;
        format!("{kind}_{stamp}")
    }

    /// Moves the generator past a stamp already present in the store, e.g. from seeded data.
    pub fn observe(&mut self, id: &str) {
        if let Some(stamp) = parse_stamp(id) {
            self.last_stamp = self.last_stamp.max(stamp);
        }
    }
}

fn parse_stamp(id: &str) -> Option<i64> {
    let (_, stamp) = id.rsplit_once('_')?;
    stamp.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_kind_prefix() {
        let mut ids = IdGenerator::new();
        assert!(ids.next_id(IdKind::Post).starts_with("post_"));
        assert!(ids.next_id(IdKind::Comment).starts_with("comment_"));
        assert!(ids.next_id(IdKind::Reply).starts_with("reply_"));
    }

    #[test]
    fn same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id_at(IdKind::Comment, 1_000);
        let b = ids.next_id_at(IdKind::Comment, 1_000);
        let c = ids.next_id_at(IdKind::Comment, 999);
        assert_eq!(a, "comment_1000");
        assert_eq!(b, "comment_1001");
        assert_eq!(c, "comment_1002");
    }

    #[test]
    fn observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe("post_5000");
        ids.observe("c1");
        assert_eq!(ids.next_id_at(IdKind::Post, 10), "post_5001");
    }
}
