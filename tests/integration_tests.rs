use serde_json::json;
use template_filters::prelude::*;

#[test]
fn test_filters_through_registry() -> Result<()> {
    // Drive both filters the way a templating host would: lookup by
    // name, then invoke with dynamic values.
    let seconds_to_time = lookup("seconds_to_time").expect("filter should be registered");
    let human_readable = lookup("human_readable").expect("filter should be registered");

    assert_eq!(seconds_to_time(&json!(0), &[])?, "00:00:00");
    assert_eq!(seconds_to_time(&json!(359_999), &[])?, "99:59:59");
    assert_eq!(seconds_to_time(&json!(360_000), &[])?, "100:00:00");

    assert_eq!(human_readable(&json!(0), &[])?, "0.00 B");
    assert_eq!(human_readable(&json!(1023), &[])?, "1023.00 B");
    assert_eq!(human_readable(&json!(1024), &[])?, "1.00 KB");
    assert_eq!(human_readable(&json!(1536), &[json!(1)])?, "1.5 KB");

    Ok(())
}

#[test]
fn test_saturation_at_petabytes() -> Result<()> {
    let pb: u64 = 1024u64.pow(5);

    assert_eq!(apply("human_readable", &json!(pb), &[])?, "1.00 PB");
    // 1024^6 bytes saturates at PB instead of moving to an EB unit.
    assert_eq!(apply("human_readable", &json!(pb * 1024), &[])?, "1024.00 PB");

    Ok(())
}

#[test]
fn test_typed_and_dynamic_layers_agree() -> Result<()> {
    for seconds in [0u64, 61, 3661, 86_400, 360_000] {
        assert_eq!(
            apply("seconds_to_time", &json!(seconds), &[])?,
            format_duration(seconds)
        );
    }

    for bytes in [0u64, 500, 1024, 1536, 5_242_880] {
        assert_eq!(
            apply("human_readable", &json!(bytes), &[])?,
            format_bytes(bytes as f64)
        );
    }

    Ok(())
}

#[test]
fn test_errors_surface_to_the_host() {
    let err = apply("seconds_to_time", &json!("61"), &[]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("seconds_to_time"));

    let err = apply("uppercase", &json!("x"), &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownFilter(_)));
    assert_eq!(err.to_string(), "Unknown filter: uppercase");
}

#[test]
fn test_concurrent_use() {
    use std::thread;

    // Stateless filters must not need coordination between threads.
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || -> template_filters::Result<()> {
                for n in 0..100u64 {
                    let seconds = n * 61 + i;
                    assert_eq!(
                        apply("seconds_to_time", &json!(seconds), &[])?,
                        format_duration(seconds)
                    );
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
}
