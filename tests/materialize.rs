#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod collections {
    use faceit_client_sdk::types::response::{Player, Rank};
    use faceit_client_sdk::{ApiResponse, Collection, Page as _, RankedCollection, materialize};
    use serde_json::json;

    #[test]
    fn player_collection_should_succeed() -> anyhow::Result<()> {
        let response = materialize::<Collection<Player>>(
            200,
            json!({
                "start": 0,
                "end": 2,
                "items": [{ "player_id": "p1" }, { "player_id": "p2" }]
            }),
        )?;

        let expected = Collection::builder()
            .start(0)
            .end(2)
            .items(vec![
                Player::builder().player_id("p1".to_owned()).build(),
                Player::builder().player_id("p2".to_owned()).build(),
            ])
            .build();

        assert_eq!(response, ApiResponse::Success(expected));

        Ok(())
    }

    #[test]
    fn items_materialize_like_single_objects() -> anyhow::Result<()> {
        let raw_items = vec![
            json!({ "player_id": "p1", "nickname": "one", "country": "de" }),
            json!({ "player_id": "p2", "memberships": null, "extra": [1, 2] }),
            json!({}),
        ];

        let collection = materialize::<Collection<Player>>(
            200,
            json!({ "start": 10, "end": 13, "items": raw_items.clone() }),
        )?
        .ok()
        .unwrap();

        assert_eq!(collection.start(), 10);
        assert_eq!(collection.end(), 13);
        assert_eq!(collection.len(), raw_items.len());
        for (item, raw) in collection.iter().zip(raw_items) {
            let single = faceit_client_sdk::materialize_value::<Player>(raw)?;
            assert_eq!(item, &single);
        }

        Ok(())
    }

    #[test]
    fn ranked_collection_keeps_position() -> anyhow::Result<()> {
        let ranked = materialize::<RankedCollection<Rank>>(
            200,
            json!({
                "start": 0,
                "end": 1,
                "position": 1500,
                "items": [{ "player_id": "p1", "position": 1500, "faceit_elo": 3100 }]
            }),
        )?
        .ok()
        .unwrap();

        assert_eq!(ranked.position, 1500);
        assert_eq!(ranked.items().len(), 1);

        let plain: Collection<Rank> = ranked.into();
        assert_eq!(plain.items.len(), 1);

        Ok(())
    }
}

mod errors {
    use faceit_client_sdk::error::{Kind, Schema, SchemaErrorKind};
    use faceit_client_sdk::types::response::{Championship, Player};
    use faceit_client_sdk::{ApiResponse, Collection, materialize};
    use serde_json::json;

    #[test]
    fn unauthorized_should_be_error_envelope() -> anyhow::Result<()> {
        let response = materialize::<Player>(401, json!({ "message": "Invalid token" }))?;

        let ApiResponse::Error(error) = response else {
            panic!("expected an error envelope");
        };
        assert_eq!(error.message, "Invalid token");
        assert_eq!(error.status_code, 401);
        assert!(!error.is_success());

        Ok(())
    }

    #[test]
    fn any_non_2xx_status_is_error_regardless_of_body() -> anyhow::Result<()> {
        for status in [199_u16, 300, 404, 429, 500, 503] {
            let response = materialize::<Championship>(status, json!({ "unexpected": [1] }))?;

            let error = response.error().unwrap();
            assert_eq!(error.status_code, status);
            assert_eq!(error.message, "Bad Request");
            assert_eq!(error.envelope.get("unexpected"), Some(&json!([1])));
        }

        Ok(())
    }

    #[test]
    fn unknown_enum_in_item_fails_with_index() {
        let error = materialize::<Collection<Player>>(
            200,
            json!({
                "start": 0,
                "end": 2,
                "items": [{ "country": "DE" }, { "country": "ZZ" }]
            }),
        )
        .unwrap_err();

        assert_eq!(error.kind(), Kind::Schema);
        let schema = error.downcast_ref::<Schema>().unwrap();
        assert_eq!(schema.kind, SchemaErrorKind::InvalidEnumValue);
        assert_eq!(schema.path, "items[1].country");
    }

    #[test]
    fn wrong_scalar_type_is_type_mismatch() {
        let error = materialize::<Player>(200, json!({ "nickname": 42 })).unwrap_err();

        let schema = error.downcast_ref::<Schema>().unwrap();
        assert_eq!(schema.kind, SchemaErrorKind::TypeMismatch);
        assert_eq!(schema.path, "nickname");
        assert_eq!(schema.resource, "Player");
    }
}

mod extras {
    use faceit_client_sdk::materialize_value;
    use faceit_client_sdk::types::response::Player;
    use serde_json::json;

    #[test]
    fn unknown_keys_survive_reserialization() -> anyhow::Result<()> {
        let player: Player = materialize_value(json!({
            "player_id": "p1",
            "activated_at": "2024-05-01T00:00:00Z",
            "verified": true
        }))?;

        assert!(player.envelope.is_success());
        assert_eq!(player.envelope.get("verified"), Some(&json!(true)));

        let value = serde_json::to_value(&player)?;
        assert_eq!(value["activated_at"], json!("2024-05-01T00:00:00Z"));
        assert_eq!(value["player_id"], json!("p1"));

        Ok(())
    }
}
