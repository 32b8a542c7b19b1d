//! Tests for short id generation.

use unconf_engine::short_id::{
    generate_short_id, generate_unique_short_id, SHORT_ID_ALPHABET, SHORT_ID_LEN,
};
use unconf_engine::EngineError;

#[test]
fn short_ids_use_unambiguous_alphabet() {
    for _ in 0..100 {
        let id = generate_short_id();
        assert_eq!(id.len(), SHORT_ID_LEN);
        assert!(id.bytes().all(|b| SHORT_ID_ALPHABET.contains(&b)), "{id}");
        assert!(!id.contains(['0', 'O', '1', 'l', 'I']), "{id}");
    }
}

#[tokio::test]
async fn unique_short_id_retries_collisions() {
    let mut calls = 0;
    let id = generate_unique_short_id(
        |_| {
            calls += 1;
            let taken = calls == 1;
            async move { Ok::<_, String>(taken) }
        },
        10,
    )
    .await
    .unwrap();

    assert_eq!(calls, 2);
    assert_eq!(id.len(), SHORT_ID_LEN);
}

#[tokio::test]
async fn oracle_errors_consume_attempts() {
    let mut calls = 0;
    let id = generate_unique_short_id(
        |_| {
            calls += 1;
            let result = if calls <= 2 {
                Err("connection reset".to_string())
            } else {
                Ok(false)
            };
            async move { result }
        },
        10,
    )
    .await
    .unwrap();

    assert_eq!(calls, 3);
    assert_eq!(id.len(), SHORT_ID_LEN);
}

#[tokio::test]
async fn exhaustion_is_an_error() {
    let result = generate_unique_short_id(|_| async { Ok::<_, String>(true) }, 3).await;
    assert!(matches!(
        result,
        Err(EngineError::ShortIdExhausted { attempts: 3 })
    ));
}
