//! Unit tests for snapshot decoding and lookups.

#[cfg(test)]
mod decode {
    use sm_core::{Ability, BankId, BotId, PadId, Point, Tick};

    use crate::{PoisonKind, WorldError, WorldView};

    const SNAPSHOT: &str = r#"{
        "tick": 12,
        "scraps": 40,
        "algae": 3,
        "bot_id_seed": 100,
        "max_bots": 8,
        "width": 20,
        "height": 15,
        "bots": {
            "7": {"id": 7, "location": {"x": 2, "y": 3}, "energy": 55.5,
                  "scraps": 0, "abilities": ["HARVEST", "SPEEDBOOST"], "algae_held": 2},
            "3": {"id": 3, "owner_id": 1, "location": {"x": 9, "y": 9}, "energy": 10,
                  "abilities": [], "algae_held": 0, "status": "IDLE"}
        },
        "visible_entities": {
            "enemies": [{"id": 50, "location": {"x": 4, "y": 4}, "scraps": 1, "abilities": ["POISON"]}],
            "algae": [
                {"location": {"x": 1, "y": 1}, "is_poison": "UNKNOWN"},
                {"location": {"x": 2, "y": 1}, "is_poison": "TRUE"},
                {"location": {"x": 3, "y": 1}, "is_poison": "FALSE"}
            ]
        },
        "permanent_entities": {
            "banks": {
                "1": {"id": 1, "location": {"x": 0, "y": 0}, "deposit_occuring": true,
                      "deposit_amount": 4, "is_deposit_owner": true, "is_bank_owner": true,
                      "deposit_ticks_left": 2, "lockpick_occuring": false,
                      "lockpick_ticks_left": 0, "lockpick_botid": null}
            },
            "energy_pads": {
                "4": {"id": 4, "location": {"x": 10, "y": 10}, "available": 0, "ticks_left": 6}
            },
            "walls": [{"x": 5, "y": 5}]
        }
    }"#;

    #[test]
    fn full_snapshot() {
        let view = WorldView::from_json(SNAPSHOT).unwrap();
        assert_eq!(view.tick, Tick(12));
        assert_eq!(view.scraps, 40);
        assert_eq!(view.bot_id_seed, 100);
        assert_eq!(view.bounds().width, 20);

        // BTreeMap keeps own bots in ascending id order.
        let ids: Vec<BotId> = view.own_bots().map(|b| b.id).collect();
        assert_eq!(ids, vec![BotId(3), BotId(7)]);
        assert_eq!(view.bot_count(), 2);
        assert_eq!(view.max_bot_id(), Some(BotId(7)));

        let b7 = view.bot(BotId(7)).unwrap();
        assert_eq!(b7.abilities, vec![Ability::Harvest, Ability::Speed]);
        assert!(b7.has_ability(Ability::Speed));
        assert_eq!(b7.location, Point::new(2, 3));

        assert_eq!(view.enemies().len(), 1);
        assert!(view.scraps_visible().is_empty());
        let kinds: Vec<PoisonKind> = view.algae().iter().map(|a| a.is_poison).collect();
        assert_eq!(kinds, vec![PoisonKind::Unknown, PoisonKind::Poisonous, PoisonKind::Safe]);

        let bank = view.bank(BankId(1)).unwrap();
        assert!(bank.deposit_occurring);
        assert!(bank.own_deposit_pending());
        assert!(!bank.own_deposit_elapsed());
        assert_eq!(bank.lockpick_bot_id, None);

        let pad = view.pad(PadId(4)).unwrap();
        assert!(!pad.available);
        assert_eq!(pad.ticks_left, 6);
        assert_eq!(view.walls(), &[Point::new(5, 5)]);
    }

    #[test]
    fn optional_sections_default() {
        let view = WorldView::from_json(
            r#"{"tick": 0, "max_bots": 4, "width": 5, "height": 5}"#,
        )
        .unwrap();
        assert_eq!(view.bot_count(), 0);
        assert!(view.enemies().is_empty());
        assert_eq!(view.banks().count(), 0);
    }

    #[test]
    fn explicit_bot_count_wins() {
        let view = WorldView::from_json(
            r#"{"tick": 0, "max_bots": 4, "bot_count": 3, "width": 5, "height": 5}"#,
        )
        .unwrap();
        assert_eq!(view.bot_count(), 3);
    }

    #[test]
    fn mismatched_bot_key_rejected() {
        let err = WorldView::from_json(
            r#"{"tick": 0, "max_bots": 4, "width": 5, "height": 5,
                "bots": {"2": {"id": 9, "location": {"x": 0, "y": 0}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            WorldError::IdMismatch { key: BotId(2), reported: BotId(9) }
        ));
    }

    #[test]
    fn empty_grid_rejected() {
        let err = WorldView::from_json(r#"{"tick": 0, "max_bots": 1, "width": 0, "height": 5}"#)
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidBounds { .. }));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = WorldView::from_json("{not json").unwrap_err();
        assert!(matches!(err, WorldError::Decode(_)));
    }

    #[test]
    fn unknown_ability_is_skipped() {
        let view = WorldView::from_json(
            r#"{"tick": 0, "max_bots": 4, "width": 5, "height": 5,
                "bots": {"1": {"id": 1, "location": {"x": 0, "y": 0},
                               "abilities": ["HARVEST", "FLY", "SPEEDBOOST"]}}}"#,
        )
        .unwrap();
        assert_eq!(view.bot(BotId(1)).unwrap().abilities, vec![Ability::Harvest, Ability::Speed]);
    }
}

#[cfg(test)]
mod builder {
    use sm_core::{BankId, BotId, PadId, Point, Tick};

    use crate::{Algae, Bank, Bot, EnemyBot, EnergyPad, PoisonKind, WorldViewBuilder};

    #[test]
    fn builder_populates_every_section() {
        let view = WorldViewBuilder::new(10, 10)
            .tick(Tick(5))
            .scraps(30)
            .max_bots(4)
            .bot_id_seed(20)
            .bot(Bot::new(BotId(2), Point::new(1, 1)))
            .bot(Bot::new(BotId(1), Point::new(2, 2)))
            .enemy(EnemyBot::new(BotId(90), Point::new(3, 3)))
            .algae(Algae::new(Point::new(4, 4), PoisonKind::Safe))
            .scrap(Point::new(5, 5), 2)
            .bank(Bank::new(BankId(1), Point::new(0, 0)).owned())
            .pad(EnergyPad::new(PadId(1), Point::new(9, 9)).with_ticks_left(3))
            .wall(Point::new(6, 6))
            .build();

        assert!(view.validate().is_ok());
        assert_eq!(view.tick, Tick(5));
        assert_eq!(view.bot_count(), 2);
        assert_eq!(view.own_bots().next().unwrap().id, BotId(1));
        assert!(view.bank(BankId(1)).unwrap().is_bank_owner);
        assert!(!view.pad(PadId(1)).unwrap().available);
        assert_eq!(view.scraps_visible()[0].amount, 2);
        assert_eq!(view.walls().len(), 1);
    }

    #[test]
    fn bot_abilities_are_deduplicated() {
        use sm_core::Ability;
        let bot = Bot::new(BotId(1), Point::new(0, 0))
            .with_abilities(&[Ability::Harvest, Ability::Harvest, Ability::Scout]);
        assert_eq!(bot.abilities, vec![Ability::Harvest, Ability::Scout]);
    }
}
