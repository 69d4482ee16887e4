#[warn(unused_imports)]
#[macro_export]
macro_rules! test_with_server {
    ($name:ident, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {
        $crate::test_with_server!(@build $name, false, |$server, $ctx_state, $config| $body);
    };
    (seeded $name:ident, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {
        $crate::test_with_server!(@build $name, true, |$server, $ctx_state, $config| $body);
    };
    (@build $name:ident, $seed:expr, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {
        #[tokio::test]
        async fn $name() {
            use axum_test::{TestServer, TestServerConfig};
            use feed_server::config::AppConfig;
            use feed_server::database::client::{Database, DbConfig};
            use feed_server::middleware::mw_ctx::create_ctx_state;

            #[allow(unused_variables)]
            let $config = AppConfig {
                seed_fixtures: $seed,
                ..AppConfig::default()
            };

            #[allow(unused_variables)]
            let $ctx_state = {
                let db = Database::connect(DbConfig {
                    seed_fixtures: $config.seed_fixtures,
                });
                create_ctx_state(db, &$config)
            };

            let routes_all = feed_server::init::main_router(&$ctx_state);

            let $server = TestServer::new_with_config(
                routes_all,
                TestServerConfig {
                    expect_success_by_default: false,
                    ..TestServerConfig::default()
                },
            )
            .expect("Failed to create test server");

            $body
        }
    };
}
