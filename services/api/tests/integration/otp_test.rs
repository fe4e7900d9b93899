use camshop_api::domain::repository::OtpStore;
use camshop_api::error::ApiError;
use camshop_api::infra::otp_store::InMemoryOtpStore;
use camshop_api::usecase::otp::{SendOtpInput, SendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

use crate::helpers::{
    ADMIN_EMAIL, FailingMailer, MockMailer, TEST_JWT_SECRET, expired_challenge, test_challenge,
};

fn send_usecase(
    store: InMemoryOtpStore,
    mailer: MockMailer,
) -> SendOtpUseCase<InMemoryOtpStore, MockMailer> {
    SendOtpUseCase {
        otp_store: store,
        mailer,
        admin_email: ADMIN_EMAIL.to_owned(),
    }
}

fn verify_usecase(store: InMemoryOtpStore) -> VerifyOtpUseCase<InMemoryOtpStore> {
    VerifyOtpUseCase {
        otp_store: store,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

// ── SendOtpUseCase ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_non_admin_email_without_storing_or_sending() {
    let store = InMemoryOtpStore::new();
    let mailer = MockMailer::new();
    let sent = mailer.sent_handle();

    let result = send_usecase(store.clone(), mailer)
        .execute(SendOtpInput {
            email: "b@y.com".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::Unauthorized)),
        "expected Unauthorized, got {result:?}"
    );
    assert!(store.get("b@y.com").is_none(), "no challenge may be stored");
    assert!(sent.lock().unwrap().is_empty(), "no mail may be sent");
}

#[tokio::test]
async fn should_store_challenge_and_send_exactly_one_mail_for_admin() {
    let store = InMemoryOtpStore::new();
    let mailer = MockMailer::new();
    let sent = mailer.sent_handle();

    send_usecase(store.clone(), mailer)
        .execute(SendOtpInput {
            email: ADMIN_EMAIL.to_owned(),
        })
        .await
        .unwrap();

    let challenge = store.get(ADMIN_EMAIL).expect("challenge should be stored");
    assert_eq!(challenge.code.len(), 6);
    assert!(challenge.code.bytes().all(|b| b.is_ascii_digit()));

    let ttl = (challenge.expires_at - challenge.issued_at).num_seconds();
    assert_eq!(ttl, 60, "challenge should expire 60s after issuance");

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1, "expected exactly one delivery attempt");
    let (to, _subject, body) = &sent[0];
    assert_eq!(to, ADMIN_EMAIL);
    assert!(body.contains(&challenge.code), "mail must carry the code");
}

#[tokio::test]
async fn should_keep_challenge_when_mailer_fails() {
    let store = InMemoryOtpStore::new();

    let usecase = SendOtpUseCase {
        otp_store: store.clone(),
        mailer: FailingMailer,
        admin_email: ADMIN_EMAIL.to_owned(),
    };
    let result = usecase
        .execute(SendOtpInput {
            email: ADMIN_EMAIL.to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::NotifierFailure(_))),
        "expected NotifierFailure, got {result:?}"
    );

    // The store write happens before the delivery attempt and is not rolled
    // back; the challenge is still verifiable.
    let challenge = store.get(ADMIN_EMAIL).expect("challenge should remain");
    let verified = verify_usecase(store)
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: challenge.code,
        })
        .await;
    assert!(verified.is_ok());
}

#[tokio::test]
async fn should_supersede_previous_challenge_on_resend() {
    let store = InMemoryOtpStore::new();
    let mailer = MockMailer::new();

    let usecase = send_usecase(store.clone(), mailer);
    let input = || SendOtpInput {
        email: ADMIN_EMAIL.to_owned(),
    };

    usecase.execute(input()).await.unwrap();
    let first = store.get(ADMIN_EMAIL).unwrap();

    usecase.execute(input()).await.unwrap();
    let second = store.get(ADMIN_EMAIL).unwrap();

    // The first code is dead even though it has not expired; only if the two
    // random codes differ is there anything to check.
    if first.code != second.code {
        let result = verify_usecase(store.clone())
            .execute(VerifyOtpInput {
                email: ADMIN_EMAIL.to_owned(),
                otp: first.code,
            })
            .await;
        assert!(matches!(result, Err(ApiError::InvalidOtp)));
    }

    let result = verify_usecase(store)
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: second.code,
        })
        .await;
    assert!(result.is_ok(), "latest code must verify");
}

// ── VerifyOtpUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_verify_exact_code_exactly_once() {
    let store = InMemoryOtpStore::new();
    store.put(test_challenge(ADMIN_EMAIL, "123456"));

    let usecase = verify_usecase(store.clone());

    let out = usecase
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "123456".to_owned(),
        })
        .await
        .unwrap();
    assert!(!out.token.is_empty());
    assert!(store.get(ADMIN_EMAIL).is_none(), "challenge is single-use");

    // Replay with the same code fails.
    let result = usecase
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "123456".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(ApiError::InvalidOtp)),
        "expected InvalidOtp, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_when_no_challenge_exists() {
    let store = InMemoryOtpStore::new();

    let result = verify_usecase(store)
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "123456".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidOtp)));
}

#[tokio::test]
async fn should_reject_expired_challenge_even_with_correct_code() {
    let store = InMemoryOtpStore::new();
    store.put(expired_challenge(ADMIN_EMAIL, "123456"));

    let result = verify_usecase(store)
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "123456".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(ApiError::InvalidOtp)),
        "expected InvalidOtp, got {result:?}"
    );
}

#[tokio::test]
async fn should_leave_challenge_intact_on_wrong_code() {
    let store = InMemoryOtpStore::new();
    store.put(test_challenge(ADMIN_EMAIL, "123456"));

    let usecase = verify_usecase(store.clone());

    let result = usecase
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "654321".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidOtp)));
    assert!(
        store.get(ADMIN_EMAIL).is_some(),
        "failed attempt must not consume the challenge"
    );

    // The legitimate holder can still succeed before expiry.
    let out = usecase
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "123456".to_owned(),
        })
        .await;
    assert!(out.is_ok());
}

#[tokio::test]
async fn should_compare_codes_as_strings() {
    let store = InMemoryOtpStore::new();
    store.put(test_challenge(ADMIN_EMAIL, "001234"));

    // Numerically equal but not the same string.
    let result = verify_usecase(store)
        .execute(VerifyOtpInput {
            email: ADMIN_EMAIL.to_owned(),
            otp: "1234".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidOtp)));
}
