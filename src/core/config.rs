//! Simulation configuration with documented constants
//!
//! Economic and event tuning values are collected here. Physiological
//! curve constants (hunger decay, regen thresholds) live with the
//! creature code since they define the update algorithm itself.

/// Tuning knobs for the zoo economy and the daily random events
///
/// Defaults reproduce the balance the simulation was tuned with;
/// tests override individual fields to force specific branches.
#[derive(Debug, Clone)]
pub struct ZooConfig {
    // === ECONOMY ===
    /// Opening balance of the zoo ledger
    pub starting_balance: f64,

    /// Flat per-visitor ticket price added on top of in-park spending
    pub ticket_price: f64,

    /// Base cost of cleaning an enclosure; the full formula is
    /// base * (1 + residents / 2), so crowded enclosures cost more
    pub clean_base_cost: f64,

    /// Upgrade cost per current upgrade level (level 1 -> 200, level 2 -> 400, ...)
    pub upgrade_base_cost: f64,

    // === VISITORS ===
    /// Inclusive range for the daily visitor head count
    pub visitors_per_day: (u32, u32),

    /// Range a visitor's personal budget is drawn from
    pub visitor_budget: (f64, f64),

    // === FEEDING & CARE ===
    /// Nutrition of the fixed ration used by daily auto-feeding
    pub auto_feed_nutrition: f32,

    /// Nutrition of a hand-fed portion (slightly richer than the auto ration)
    pub hand_feed_nutrition: f32,

    /// Flat health restored by one dose of medicine
    pub medicine_heal: f32,

    // === RANDOM EVENTS ===
    // One uniform draw in [0,1) per day falls into mutually exclusive
    // bands: [0, heatwave) -> heatwave, [heatwave, donation) -> donation,
    // [donation, escape) -> escape scare, otherwise nothing.
    /// Upper bound of the heatwave band
    pub heatwave_band: f64,

    /// Upper bound of the donation band
    pub donation_band: f64,

    /// Upper bound of the escape-scare band
    pub escape_band: f64,

    /// Emergency cooling debit during a heatwave; absorbed if unaffordable
    pub heatwave_cost: f64,

    /// Repair debit after an escape scare; absorbed if unaffordable
    pub escape_repair_cost: f64,

    /// Donations only arrive while the zoo looks prosperous
    pub donation_min_balance: f64,

    /// Range a donation amount is drawn from
    pub donation_amount: (f64, f64),
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            starting_balance: 2000.0,
            ticket_price: 25.0,
            clean_base_cost: 20.0,
            upgrade_base_cost: 200.0,
            visitors_per_day: (5, 20),
            visitor_budget: (10.0, 200.0),
            auto_feed_nutrition: 20.0,
            hand_feed_nutrition: 25.0,
            medicine_heal: 15.0,
            heatwave_band: 0.06,
            donation_band: 0.12,
            escape_band: 0.18,
            heatwave_cost: 200.0,
            escape_repair_cost: 50.0,
            donation_min_balance: 1000.0,
            donation_amount: (100.0, 500.0),
        }
    }
}
