//! Unit tests for sm-behavior.

#[cfg(test)]
mod helpers {
    use sm_core::BotId;
    use sm_spatial::testkit::open_grid;
    use sm_spatial::{Navigator, PathHints};
    use sm_world::WorldView;

    use crate::{AgentContext, DynNavigator, Obstacles};

    /// Run `f` against a context for bot `id` over an open-grid guide.
    pub fn with_ctx<R>(
        view:  &WorldView,
        id:    BotId,
        avoid: bool,
        f:     impl FnOnce(&AgentContext<'_>) -> R,
    ) -> R {
        let table = open_grid(view.width, view.height);
        let hints: &dyn PathHints = &table;
        let nav: DynNavigator<'_> = Navigator::new(hints, view.bounds());
        let obstacles = Obstacles::from_view(view);
        let bot = view.bot(id).expect("bot present in view");
        let ctx = AgentContext::new(view, bot, &nav, &obstacles, avoid);
        f(&ctx)
    }
}

// ── Action wire form ──────────────────────────────────────────────────────────

#[cfg(test)]
mod action {
    use serde_json::json;
    use sm_core::{Ability, Direction, Point};

    use crate::Action;

    fn wire(a: Action) -> serde_json::Value {
        serde_json::to_value(a).unwrap()
    }

    #[test]
    fn move_forms() {
        assert_eq!(wire(Action::Move(Direction::North)), json!({"action": "MOVE", "direction": "NORTH"}));
        assert_eq!(
            wire(Action::MoveSpeed { direction: Direction::West, step: 2 }),
            json!({"action": "MOVE", "direction": "WEST", "step": 2})
        );
    }

    #[test]
    fn nullable_direction() {
        assert_eq!(wire(Action::Harvest(None)), json!({"action": "HARVEST", "direction": null}));
        assert_eq!(
            wire(Action::Deposit(Some(Direction::East))),
            json!({"action": "DEPOSIT", "direction": "EAST"})
        );
        assert_eq!(wire(Action::Poison(None)), json!({"action": "POISON", "direction": null}));
        assert_eq!(wire(Action::SelfDestruct), json!({"action": "SELF_DESTRUCT", "direction": null}));
    }

    #[test]
    fn lockpick_carries_location() {
        assert_eq!(
            wire(Action::Lockpick(Point::new(3, 7))),
            json!({"action": "LOCKPICK", "location": {"x": 3, "y": 7}})
        );
        assert_eq!(Action::Lockpick(Point::new(0, 0)).ability(), Ability::Lockpick);
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacles {
    use sm_core::{BotId, Point};
    use sm_world::{Bot, EnemyBot, WorldViewBuilder};

    use crate::Obstacles;

    #[test]
    fn walls_and_enemies_always_block() {
        let view = WorldViewBuilder::new(5, 5)
            .wall(Point::new(1, 1))
            .enemy(EnemyBot::new(BotId(99), Point::new(2, 2)))
            .build();
        let o = Obstacles::from_view(&view);
        assert!(o.blocks(Point::new(1, 1), BotId(1), false));
        assert!(o.blocks(Point::new(2, 2), BotId(1), false));
        assert!(!o.blocks(Point::new(3, 3), BotId(1), true));
    }

    #[test]
    fn own_bots_block_only_when_avoided() {
        let view = WorldViewBuilder::new(5, 5)
            .bot(Bot::new(BotId(1), Point::new(0, 0)))
            .bot(Bot::new(BotId(2), Point::new(0, 1)))
            .build();
        let o = Obstacles::from_view(&view);
        assert!(o.blocks(Point::new(0, 1), BotId(1), true));
        assert!(!o.blocks(Point::new(0, 1), BotId(1), false));
        // A bot never blocks itself.
        assert!(!o.blocks(Point::new(0, 0), BotId(1), true));
    }

    #[test]
    fn stacked_bots_block_each_other() {
        let view = WorldViewBuilder::new(5, 5)
            .bot(Bot::new(BotId(1), Point::new(2, 2)))
            .bot(Bot::new(BotId(2), Point::new(2, 2)))
            .build();
        let o = Obstacles::from_view(&view);
        assert!(o.has_other_own(Point::new(2, 2), BotId(1)));
        assert!(o.has_other_own(Point::new(2, 2), BotId(2)));
    }
}

// ── AgentContext ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod context {
    use sm_core::{Ability, BankId, BotId, Direction, PadId, Point};
    use sm_spatial::SpeedStep;
    use sm_world::{Algae, Bank, Bot, EnemyBot, EnergyPad, PoisonKind, WorldViewBuilder};

    use super::helpers::with_ctx;
    use crate::BehaviorError;

    const ME: BotId = BotId(1);

    fn me_at(x: i32, y: i32) -> Bot {
        Bot::new(ME, Point::new(x, y))
            .with_energy(50.0)
            .with_algae(2)
            .with_abilities(&[Ability::Harvest, Ability::Deposit])
    }

    #[test]
    fn status_accessors() {
        let view = WorldViewBuilder::new(10, 10).bot(me_at(3, 4)).build();
        with_ctx(&view, ME, true, |ctx| {
            assert_eq!(ctx.id(), ME);
            assert_eq!(ctx.location(), Point::new(3, 4));
            assert_eq!(ctx.algae_held(), 2);
            assert!((ctx.energy() - 50.0).abs() < f32::EPSILON);
            assert!(ctx.has_ability(Ability::Harvest));
            assert!(!ctx.has_ability(Ability::Speed));
            assert_eq!(ctx.abilities().len(), 2);
        });
    }

    #[test]
    fn cost_and_can_spawn() {
        let view = WorldViewBuilder::new(10, 10).scraps(20).max_bots(2).bot(me_at(0, 0)).build();
        with_ctx(&view, ME, true, |ctx| {
            assert_eq!(ctx.cost(&[Ability::Harvest, Ability::Scout]).scrap, 20);
            assert!(ctx.can_spawn(&[Ability::Harvest, Ability::Scout]));
            assert!(!ctx.can_spawn(&[Ability::Harvest, Ability::Scout, Ability::Shield]));
        });

        let full = WorldViewBuilder::new(10, 10).scraps(100).max_bots(1).bot(me_at(0, 0)).build();
        with_ctx(&full, ME, true, |ctx| assert!(!ctx.can_spawn(&[])));
    }

    #[test]
    fn radius_filters_are_inclusive() {
        let view = WorldViewBuilder::new(10, 10)
            .bot(me_at(5, 5))
            .bot(Bot::new(BotId(2), Point::new(5, 7)))
            .enemy(EnemyBot::new(BotId(90), Point::new(6, 5)))
            .enemy(EnemyBot::new(BotId(91), Point::new(9, 9)))
            .algae(Algae::new(Point::new(5, 3), PoisonKind::Unknown))
            .scrap(Point::new(4, 5), 1)
            .wall(Point::new(5, 6))
            .build();
        with_ctx(&view, ME, true, |ctx| {
            let here = ctx.location();
            assert_eq!(ctx.sense_enemies().len(), 2);
            assert_eq!(ctx.sense_enemies_in_radius(here, 1).len(), 1);
            assert_eq!(ctx.sense_own_bots().len(), 1);
            assert_eq!(ctx.sense_own_bots_in_radius(here, 1).len(), 0);
            assert_eq!(ctx.sense_own_bots_in_radius(here, 2).len(), 1);
            assert_eq!(ctx.sense_algae_in_radius(here, 1).len(), 0);
            assert_eq!(ctx.sense_algae_in_radius(here, 2).len(), 1);
            assert_eq!(ctx.sense_scraps_in_radius(here, 1).len(), 1);
            assert_eq!(ctx.sense_walls_in_radius(here, 1), vec![Point::new(5, 6)]);
            assert_eq!(ctx.sense_walls().len(), 1);
        });
    }

    #[test]
    fn algae_ranked_by_guide_distance() {
        let view = WorldViewBuilder::new(10, 10)
            .bot(me_at(0, 0))
            .algae(Algae::new(Point::new(6, 0), PoisonKind::Unknown))
            .algae(Algae::new(Point::new(2, 0), PoisonKind::Unknown))
            .algae(Algae::new(Point::new(1, 0), PoisonKind::Poisonous))
            .algae(Algae::new(Point::new(0, 3), PoisonKind::Safe))
            .build();
        with_ctx(&view, ME, true, |ctx| {
            let unknown = ctx.sense_unknown_algae(ctx.location());
            let ranked: Vec<(u32, Point)> = unknown.iter().map(|(d, a)| (*d, a.location)).collect();
            assert_eq!(ranked, vec![(2, Point::new(2, 0)), (6, Point::new(6, 0))]);

            let safe = ctx.sense_safe_algae(ctx.location());
            assert_eq!(safe.len(), 1);
            assert_eq!(safe[0].0, 3);
        });
    }

    #[test]
    fn bank_ranking() {
        let mut depositing = Bank::new(BankId(3), Point::new(9, 9));
        depositing.deposit_occurring = true;
        let view = WorldViewBuilder::new(10, 10)
            .bot(me_at(0, 0))
            .bank(Bank::new(BankId(1), Point::new(6, 0)).owned())
            .bank(Bank::new(BankId(2), Point::new(0, 3)).owned())
            .bank(depositing)
            .build();
        with_ctx(&view, ME, true, |ctx| {
            let mine: Vec<BankId> = ctx.my_banks_ranked().iter().map(|b| b.id).collect();
            assert_eq!(mine, vec![BankId(2), BankId(1)]);

            let theirs: Vec<BankId> = ctx.opponent_banks_sorted().iter().map(|b| b.id).collect();
            assert_eq!(theirs, vec![BankId(3)]);

            let dep: Vec<BankId> = ctx.depositing_banks_sorted().iter().map(|b| b.id).collect();
            assert_eq!(dep, vec![BankId(3)]);

            assert_eq!(ctx.nearest_bank().map(|b| b.id), Some(BankId(2)));
            assert!(ctx.bank(BankId(1)).is_some());
            assert!(ctx.bank(BankId(9)).is_none());
        });
    }

    #[test]
    fn bank_approach_skips_blocked_neighbours() {
        let bank = Bank::new(BankId(1), Point::new(4, 0)).owned();
        let view = WorldViewBuilder::new(10, 10)
            .bot(me_at(0, 0))
            .bank(bank.clone())
            .wall(Point::new(3, 0))
            .build();
        with_ctx(&view, ME, true, |ctx| {
            // (3,0) is walled off, so the best open neighbour is 5 away.
            let (d, cell) = ctx.bank_approach(&bank).unwrap();
            assert_eq!(d, 5);
            assert_ne!(cell, Point::new(3, 0));
        });
    }

    #[test]
    fn nearest_of_kind_empty_is_none() {
        let view = WorldViewBuilder::new(10, 10).bot(me_at(0, 0)).build();
        with_ctx(&view, ME, true, |ctx| {
            assert!(ctx.nearest_bank().is_none());
            assert!(ctx.nearest_energy_pad().is_none());
            assert!(ctx.nearest_scrap().is_none());
            assert!(ctx.nearest_algae().is_none());
            assert!(ctx.nearest_enemy().is_none());
            assert!(ctx.my_banks_ranked().is_empty());
        });
    }

    #[test]
    fn nearest_pad_by_guide_distance() {
        let view = WorldViewBuilder::new(10, 10)
            .bot(me_at(5, 5))
            .pad(EnergyPad::new(PadId(1), Point::new(0, 0)))
            .pad(EnergyPad::new(PadId(2), Point::new(6, 7)))
            .build();
        with_ctx(&view, ME, true, |ctx| {
            assert_eq!(ctx.nearest_energy_pad().map(|p| p.id), Some(PadId(2)));
            assert!(ctx.energy_pad(PadId(1)).is_some());
        });
    }

    #[test]
    fn blocking_rules() {
        let view = WorldViewBuilder::new(5, 5)
            .bot(me_at(0, 0))
            .bot(Bot::new(BotId(2), Point::new(1, 0)))
            .wall(Point::new(0, 1))
            .build();
        with_ctx(&view, ME, true, |ctx| {
            assert!(ctx.is_blocked(Point::new(-1, 0)));
            assert!(ctx.is_blocked(Point::new(0, 1)));
            assert!(ctx.is_blocked(Point::new(1, 0)));
            assert!(ctx.is_blocked_direction(Direction::South));
            assert!(!ctx.can_move(Direction::West));
            assert!(ctx.can_move(Direction::North));
        });
        with_ctx(&view, ME, false, |ctx| {
            assert!(!ctx.is_blocked(Point::new(1, 0)));
            assert!(!ctx.is_blocked_direction(Direction::East));
        });
    }

    #[test]
    fn move_target_routes_around_wall() {
        let view = WorldViewBuilder::new(10, 10)
            .bot(me_at(0, 0))
            .wall(Point::new(1, 0))
            .build();
        with_ctx(&view, ME, true, |ctx| {
            // Guide prefers EAST, which is walled; NORTH is the second candidate.
            assert_eq!(ctx.move_target(Point::new(3, 1)), Some(Direction::North));
            assert_eq!(ctx.move_target(Point::new(0, 0)), None);
        });
    }

    #[test]
    fn speed_requires_ability() {
        let view = WorldViewBuilder::new(10, 10).bot(me_at(0, 0)).build();
        with_ctx(&view, ME, true, |ctx| {
            let err = ctx.move_speed_target(Point::new(5, 0)).unwrap_err();
            assert!(matches!(err, BehaviorError::MissingAbility(Ability::Speed)));
        });

        let fast = Bot::new(ME, Point::new(0, 0)).with_abilities(&[Ability::Scout, Ability::Speed]);
        let view = WorldViewBuilder::new(10, 10).bot(fast).build();
        with_ctx(&view, ME, true, |ctx| {
            assert_eq!(
                ctx.move_speed_target(Point::new(5, 0)).unwrap(),
                SpeedStep::new(Direction::East, 2)
            );
        });
    }
}

// ── IdlePolicy ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle {
    use sm_core::{BotId, Point};
    use sm_world::{Bot, WorldViewBuilder};

    use super::helpers::with_ctx;
    use crate::{BotPolicy, IdlePolicy};

    #[test]
    fn never_acts() {
        let view = WorldViewBuilder::new(3, 3).bot(Bot::new(BotId(1), Point::new(1, 1))).build();
        let mut policy = IdlePolicy;
        assert_eq!(policy.name(), "idle");
        assert!(policy.avoid_own_bots());
        with_ctx(&view, BotId(1), true, |ctx| {
            assert_eq!(policy.act(ctx).unwrap(), None);
        });
    }
}
