pub mod validate_utils;
