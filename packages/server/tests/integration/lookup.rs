use std::collections::BTreeMap;

use sea_orm::{DbBackend, DbErr, MockDatabase, Value};

use crate::common::{TestApp, routes};

mod search_mode {
    use super::*;

    #[tokio::test]
    async fn missing_parameter_serves_search_page_verbatim() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::LOOKUP).await;

        assert_eq!(res.status, 200);
        assert!(res.content_type.starts_with("text/html"));
        assert_eq!(res.text, app.search_page());
    }

    #[tokio::test]
    async fn blank_parameter_serves_search_page() {
        let app = TestApp::spawn().await;

        for path in [routes::lookup(""), routes::lookup("%20%20")] {
            let res = app.get(&path).await;
            assert_eq!(res.status, 200, "{path}");
            assert_eq!(res.text, app.search_page(), "{path}");
        }
    }

    #[tokio::test]
    async fn search_page_does_not_touch_storage() {
        // Exactly one empty result set is queued. If the search request
        // consumed it, the lookup below would find an exhausted mock and fail.
        let mock = MockDatabase::new(DbBackend::Sqlite)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()]);
        let app = TestApp::spawn_mock(mock).await;

        let res = app.get(routes::LOOKUP).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.text, app.search_page());

        let res = app.get(&routes::lookup("")).await;
        assert_eq!(res.text, app.search_page());

        let res = app.get(&routes::lookup("25")).await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("<title>Pokemon Info</title>"));
        assert!(!res.text.contains("<h1>"));
    }
}

mod error_mode {
    use super::*;

    #[tokio::test]
    async fn non_numeric_id_serves_error_page() {
        let app = TestApp::spawn().await;

        for raw in ["pikachu", "25a", "-1", "2.5", "%2025"] {
            let res = app.get(&routes::lookup(raw)).await;
            assert_eq!(res.status, 400, "{raw}");
            assert!(res.content_type.starts_with("text/html"));
            assert_eq!(res.text, app.error_page(), "{raw}");
        }
    }

    #[tokio::test]
    async fn id_above_range_serves_error_page() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::lookup("1026")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.text, app.error_page());
    }

    #[tokio::test]
    async fn legacy_mode_answers_invalid_ids_with_ok() {
        let app = TestApp::spawn_sqlite(true).await;

        let res = app.get(&routes::lookup("1026")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.text, app.error_page());
    }
}

mod result_mode {
    use super::*;

    #[tokio::test]
    async fn single_record_is_rendered() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::lookup("25")).await;

        assert_eq!(res.status, 200);
        assert!(res.content_type.starts_with("text/html"));
        assert!(res.text.contains("<title>Pokemon Info</title>"));
        assert!(res.text.contains("<h1>Pikachu</h1>"));
        assert!(res.text.contains("<h2>ID: #0025</h2>"));
        assert!(res.text.contains("<h2>Type(s): Electric</h2>"));
        assert!(res.text.contains(r#"src="/images/pokemon/0025.png""#));
        assert!(res.text.contains(r#"src="/images/types/Electric.png""#));
    }

    #[tokio::test]
    async fn regional_forms_are_listed_in_storage_order() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::lookup("26")).await;

        assert_eq!(res.status, 200);
        let base = res.text.find("<h1>Raichu</h1>").expect("base form");
        let alolan = res.text.find("<h1>Raichu (Alolan)</h1>").expect("alolan form");
        assert!(base < alolan);
        assert!(res.text.contains(r#"src="/images/types/Psychic.png""#));
    }

    #[tokio::test]
    async fn dual_type_renders_both_badges() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::lookup("6")).await;

        let fire = res.text.find("/images/types/Fire.png").expect("fire badge");
        let flying = res.text.find("/images/types/Flying.png").expect("flying badge");
        assert!(fire < flying);
    }

    #[tokio::test]
    async fn leading_zeros_and_upper_bound_are_accepted() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::lookup("0025")).await;
        assert!(res.text.contains("<h1>Pikachu</h1>"));

        let res = app.get(&routes::lookup("1025")).await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("<h1>Pecharunt</h1>"));
    }

    #[tokio::test]
    async fn blank_form_is_not_appended_and_name_is_escaped() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::lookup("83")).await;

        assert!(res.text.contains("<h1>Farfetch&#39;d</h1>"));
        assert!(!res.text.contains("Farfetch&#39;d ("));
    }

    #[tokio::test]
    async fn repeated_parameter_uses_first_value() {
        let app = TestApp::spawn().await;

        let res = app.get("/pokemon?pokemon_id=25&pokemon_id=26").await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("<h1>Pikachu</h1>"));
        assert!(!res.text.contains("Raichu"));

        let res = app.get("/pokemon?pokemon_id=abc&pokemon_id=25").await;
        assert_eq!(res.status, 400);
        assert_eq!(res.text, app.error_page());
    }

    #[tokio::test]
    async fn valid_id_without_rows_renders_empty_result_page() {
        let app = TestApp::spawn().await;

        for raw in ["0", "151"] {
            let res = app.get(&routes::lookup(raw)).await;
            assert_eq!(res.status, 200, "{raw}");
            assert!(res.text.contains("<title>Pokemon Info</title>"));
            assert!(!res.text.contains("<h1>"));
            assert_ne!(res.text, app.error_page());
        }
    }
}

mod storage_failure {
    use super::*;

    #[tokio::test]
    async fn failing_query_serves_unavailable_page() {
        let app = TestApp::spawn_failing(vec![DbErr::Custom("database is locked".into())]).await;

        let res = app.get(&routes::lookup("25")).await;

        assert_eq!(res.status, 500);
        assert!(res.content_type.starts_with("text/html"));
        assert_eq!(res.text, app.unavailable_page());
        assert!(!res.text.contains("Pokemon Info"));
    }

    #[tokio::test]
    async fn invalid_id_is_rejected_before_storage() {
        let app = TestApp::spawn_failing(vec![DbErr::Custom("unreachable".into())]).await;

        let res = app.get(&routes::lookup("abc")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.text, app.error_page());
    }

    #[tokio::test]
    async fn missing_table_is_a_storage_failure() {
        let app = TestApp::spawn_unseeded().await;

        let res = app.get(&routes::lookup("25")).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.text, app.unavailable_page());
    }
}

mod api_docs {
    use super::*;

    #[tokio::test]
    async fn openapi_describes_lookup_endpoint() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::OPENAPI).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("\"/pokemon\""));
        assert!(res.text.contains("lookupPokemon"));
        assert!(res.text.contains("pokemon_id"));
    }
}
