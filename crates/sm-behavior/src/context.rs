//! Read-only per-bot view of one tick.

use sm_core::{Ability, AbilityCost, BankId, BotId, Bounds, Direction, PadId, Point, Tick};
use sm_spatial::{Navigator, PathHints, SpeedStep};
use sm_world::{Algae, Bank, Bot, EnemyBot, EnergyPad, PoisonKind, Scrap, WorldView};

use crate::{BehaviorError, BehaviorResult, Obstacles};

/// The navigator type shared by every context in a tick.
pub type DynNavigator<'a> = Navigator<&'a dyn PathHints>;

/// A read-only snapshot of the tick, seen from one bot.
///
/// Built by the engine for every living bot and passed to
/// [`BotPolicy::act`][crate::BotPolicy::act].  Nothing here mutates; the
/// same `WorldView`, navigator, and obstacle index back every context of the
/// tick.
///
/// # Lifetimes
///
/// All borrows live for one tick's action phase.
pub struct AgentContext<'a> {
    view:           &'a WorldView,
    bot:            &'a Bot,
    nav:            &'a DynNavigator<'a>,
    obstacles:      &'a Obstacles,
    avoid_own_bots: bool,
}

impl<'a> AgentContext<'a> {
    #[inline]
    pub fn new(
        view:           &'a WorldView,
        bot:            &'a Bot,
        nav:            &'a DynNavigator<'a>,
        obstacles:      &'a Obstacles,
        avoid_own_bots: bool,
    ) -> Self {
        Self { view, bot, nav, obstacles, avoid_own_bots }
    }

    // ── Status ────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> BotId {
        self.bot.id
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        self.bot.energy
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.bot.location
    }

    pub fn abilities(&self) -> &'a [Ability] {
        &self.bot.abilities
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.bot.has_ability(ability)
    }

    pub fn algae_held(&self) -> u32 {
        self.bot.algae_held
    }

    /// Scrap carried by this bot.
    pub fn scraps(&self) -> u32 {
        self.bot.scraps
    }

    pub fn tick(&self) -> Tick {
        self.view.tick
    }

    pub fn bot(&self) -> &'a Bot {
        self.bot
    }

    pub fn view(&self) -> &'a WorldView {
        self.view
    }

    pub fn bounds(&self) -> Bounds {
        self.nav.bounds()
    }

    // ── Cost ──────────────────────────────────────────────────────────────

    /// Spawn cost of `abilities` (duplicates count once).
    pub fn cost(&self, abilities: &[Ability]) -> AbilityCost {
        AbilityCost::of(abilities)
    }

    /// Room under the bot cap and enough pooled scrap for `abilities`.
    pub fn can_spawn(&self, abilities: &[Ability]) -> bool {
        self.view.bot_count() < self.view.max_bots && self.view.scraps >= self.cost(abilities).scrap
    }

    // ── Sensing ───────────────────────────────────────────────────────────

    pub fn sense_enemies(&self) -> &'a [EnemyBot] {
        self.view.enemies()
    }

    /// Visible enemies within Manhattan `radius` of `center` (inclusive).
    pub fn sense_enemies_in_radius(&self, center: Point, radius: u32) -> Vec<&'a EnemyBot> {
        self.view
            .enemies()
            .iter()
            .filter(|e| e.location.manhattan(center) <= radius)
            .collect()
    }

    /// Own bots other than this one.
    pub fn sense_own_bots(&self) -> Vec<&'a Bot> {
        let me = self.bot.id;
        self.view.own_bots().filter(|b| b.id != me).collect()
    }

    pub fn sense_own_bots_in_radius(&self, center: Point, radius: u32) -> Vec<&'a Bot> {
        let me = self.bot.id;
        self.view
            .own_bots()
            .filter(|b| b.id != me && b.location.manhattan(center) <= radius)
            .collect()
    }

    pub fn sense_algae_in_radius(&self, center: Point, radius: u32) -> Vec<&'a Algae> {
        self.view
            .algae()
            .iter()
            .filter(|a| a.location.manhattan(center) <= radius)
            .collect()
    }

    pub fn sense_scraps_in_radius(&self, center: Point, radius: u32) -> Vec<&'a Scrap> {
        self.view
            .scraps_visible()
            .iter()
            .filter(|s| s.location.manhattan(center) <= radius)
            .collect()
    }

    pub fn sense_walls(&self) -> &'a [Point] {
        self.view.walls()
    }

    pub fn sense_walls_in_radius(&self, center: Point, radius: u32) -> Vec<Point> {
        self.view
            .walls()
            .iter()
            .copied()
            .filter(|w| w.manhattan(center) <= radius)
            .collect()
    }

    /// Unclassified algae ranked by guide distance from `from`.  Patches the
    /// guide has no distance for are left out.
    pub fn sense_unknown_algae(&self, from: Point) -> Vec<(u32, &'a Algae)> {
        self.algae_by_distance(from, PoisonKind::Unknown)
    }

    /// Algae known to be safe, ranked by guide distance from `from`.
    pub fn sense_safe_algae(&self, from: Point) -> Vec<(u32, &'a Algae)> {
        self.algae_by_distance(from, PoisonKind::Safe)
    }

    fn algae_by_distance(&self, from: Point, kind: PoisonKind) -> Vec<(u32, &'a Algae)> {
        let mut out: Vec<(u32, &'a Algae)> = self
            .view
            .algae()
            .iter()
            .filter(|a| a.is_poison == kind)
            .filter_map(|a| self.nav.distance(from, a.location).map(|d| (d, a)))
            .collect();
        out.sort_by_key(|&(d, _)| d);
        out
    }

    // ── Structures ────────────────────────────────────────────────────────

    pub fn bank(&self, id: BankId) -> Option<&'a Bank> {
        self.view.bank(id)
    }

    pub fn energy_pad(&self, id: PadId) -> Option<&'a EnergyPad> {
        self.view.pad(id)
    }

    /// Banks with a deposit in progress, nearest first (Manhattan).
    pub fn depositing_banks_sorted(&self) -> Vec<&'a Bank> {
        let here = self.location();
        let mut banks: Vec<&'a Bank> = self.view.banks().filter(|b| b.deposit_occurring).collect();
        banks.sort_by_key(|b| b.location.manhattan(here));
        banks
    }

    /// The closest open cell next to `bank` by guide distance from this bot,
    /// with that distance.  `None` when no neighbour is both unblocked and
    /// known to the guide.
    pub fn bank_approach(&self, bank: &Bank) -> Option<(u32, Point)> {
        let here = self.location();
        bank.location
            .neighbours()
            .into_iter()
            .filter(|&adj| !self.is_blocked(adj))
            .filter_map(|adj| self.path_distance(here, adj).map(|d| (d, adj)))
            .min_by_key(|&(d, _)| d)
    }

    /// Own banks ordered by [`bank_approach`](Self::bank_approach) distance.
    /// Banks with no reachable neighbour sort last.
    pub fn my_banks_ranked(&self) -> Vec<&'a Bank> {
        let mut banks: Vec<(u32, &'a Bank)> = self
            .view
            .banks()
            .filter(|b| b.is_bank_owner)
            .map(|b| (self.bank_approach(b).map_or(u32::MAX, |(d, _)| d), b))
            .collect();
        banks.sort_by_key(|&(d, _)| d);
        banks.into_iter().map(|(_, b)| b).collect()
    }

    /// Banks owned by other players, nearest first by guide distance (unknown
    /// distances last).
    pub fn opponent_banks_sorted(&self) -> Vec<&'a Bank> {
        let here = self.location();
        let mut banks: Vec<&'a Bank> = self.view.banks().filter(|b| !b.is_bank_owner).collect();
        banks.sort_by_key(|b| self.path_distance(here, b.location).unwrap_or(u32::MAX));
        banks
    }

    // ── Nearest of kind ───────────────────────────────────────────────────

    pub fn nearest_bank(&self) -> Option<&'a Bank> {
        let here = self.location();
        self.view.banks().min_by_key(|b| b.location.manhattan(here))
    }

    /// Nearest pad by guide distance, falling back to Manhattan where the
    /// guide has no entry.
    pub fn nearest_energy_pad(&self) -> Option<&'a EnergyPad> {
        let here = self.location();
        self.view.energy_pads().min_by_key(|p| {
            self.path_distance(here, p.location)
                .unwrap_or_else(|| p.location.manhattan(here))
        })
    }

    pub fn nearest_scrap(&self) -> Option<&'a Scrap> {
        let here = self.location();
        self.view.scraps_visible().iter().min_by_key(|s| s.location.manhattan(here))
    }

    pub fn nearest_algae(&self) -> Option<&'a Algae> {
        let here = self.location();
        self.view.algae().iter().min_by_key(|a| a.location.manhattan(here))
    }

    pub fn nearest_enemy(&self) -> Option<&'a EnemyBot> {
        let here = self.location();
        self.view.enemies().iter().min_by_key(|e| e.location.manhattan(here))
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Out of bounds, a wall, a visible enemy, or (when this bot avoids them)
    /// another own bot.
    pub fn is_blocked(&self, p: Point) -> bool {
        !self.bounds().contains(p) || self.obstacles.blocks(p, self.bot.id, self.avoid_own_bots)
    }

    pub fn is_blocked_direction(&self, dir: Direction) -> bool {
        self.is_blocked(self.location().step(dir, 1))
    }

    /// A single step in `dir` stays on the map.  Obstacles are ignored.
    pub fn can_move(&self, dir: Direction) -> bool {
        self.bounds().step(self.location(), dir, 1).is_some()
    }

    pub fn path_distance(&self, from: Point, to: Point) -> Option<u32> {
        self.nav.distance(from, to)
    }

    /// Best unblocked first step toward `target`.
    pub fn move_target(&self, target: Point) -> Option<Direction> {
        self.nav.next_step(self.location(), target, |p| self.is_blocked(p))
    }

    /// Speed-move toward `target`.  The bot must carry `SPEED`.
    pub fn move_speed_target(&self, target: Point) -> BehaviorResult<SpeedStep> {
        if !self.has_ability(Ability::Speed) {
            return Err(BehaviorError::MissingAbility(Ability::Speed));
        }
        Ok(self.nav.next_speed_step(self.location(), target, |p| self.is_blocked(p)))
    }
}
