#[cfg(test)]
mod common_tests {
    mod parse_query_tests {
        use crate::common::common::parse_query;

        #[test]
        fn test_parse_query_none() {
            let result = parse_query(None).unwrap();
            assert!(result.is_empty());
        }

        #[test]
        fn test_parse_query_percent_decoding() {
            let result = parse_query(Some(String::from("info_hash=%ab%cd%01&port=6881"))).unwrap();
            assert_eq!(result.get("info_hash").unwrap()[0], vec![0xab, 0xcd, 0x01]);
            assert_eq!(result.get("port").unwrap()[0], b"6881".to_vec());
        }

        #[test]
        fn test_parse_query_repeated_keys() {
            let result = parse_query(Some(String::from("info_hash=a&info_hash=b"))).unwrap();
            let values = result.get("info_hash").unwrap();
            assert_eq!(values.len(), 2);
            assert_eq!(values[1], b"b".to_vec());
        }

        #[test]
        fn test_parse_query_lowercases_keys_and_keeps_flags() {
            let result = parse_query(Some(String::from("PORT=1&no_peer_id&&=x"))).unwrap();
            assert!(result.contains_key("port"));
            assert!(result.get("no_peer_id").unwrap().is_empty());
            assert_eq!(result.len(), 2);
        }
    }

    mod parse_file_size_tests {
        use crate::common::common::parse_file_size;

        #[test]
        fn test_plain_bytes() {
            assert_eq!(parse_file_size("1024").unwrap(), 1024);
            assert_eq!(parse_file_size("12b").unwrap(), 12);
        }

        #[test]
        fn test_units_are_case_insensitive() {
            assert_eq!(parse_file_size("500MB").unwrap(), 500 * 1024 * 1024);
            assert_eq!(parse_file_size("10mb").unwrap(), 10 * 1024 * 1024);
            assert_eq!(parse_file_size("2Kb").unwrap(), 2048);
            assert_eq!(parse_file_size("1g").unwrap(), 1 << 30);
            assert_eq!(parse_file_size("1 TB").unwrap(), 1 << 40);
        }

        #[test]
        fn test_fractions_truncate() {
            assert_eq!(parse_file_size("1.5k").unwrap(), 1536);
            assert_eq!(parse_file_size("0.5b").unwrap(), 0);
        }

        #[test]
        fn test_rejects_garbage() {
            assert!(parse_file_size("").is_err());
            assert!(parse_file_size("mb").is_err());
            assert!(parse_file_size("-1mb").is_err());
            assert!(parse_file_size("10 parsecs").is_err());
            assert!(parse_file_size("1.2.3mb").is_err());
        }

        #[test]
        fn test_rejects_overflow() {
            assert!(parse_file_size("18446744073709551615tb").is_err());
        }
    }

    mod hex_tests {
        use crate::common::common::hex_to_nibble;

        #[test]
        fn test_hex_to_nibble() {
            assert_eq!(hex_to_nibble(b'0'), 0);
            assert_eq!(hex_to_nibble(b'a'), 10);
            assert_eq!(hex_to_nibble(b'F'), 15);
            assert_eq!(hex_to_nibble(b'g'), 0xFF);
        }
    }

    mod log_level_tests {
        use crate::common::common::parse_log_level;

        #[test]
        fn test_parse_log_level() {
            assert_eq!(parse_log_level("info"), Some(log::LevelFilter::Info));
            assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
            assert_eq!(parse_log_level("verbose"), None);
        }
    }

    mod custom_error_tests {
        use crate::common::structs::custom_error::CustomError;

        #[test]
        fn test_custom_error_display() {
            let error = CustomError::new("missing info_hash");
            assert_eq!(error.to_string(), "missing info_hash");
            assert_eq!(error.message(), "missing info_hash");
        }
    }
}
