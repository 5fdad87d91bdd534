use super::fiber::Fiber;
use super::parameter::ParameterSetting;

// --- Fiber polarity breakpoints (XLogP) ---
pub const PDMS_MIN_XLOGP: f64 = 3.0;
pub const PDMS_DVB_MIN_XLOGP: f64 = 1.5;
pub const DVB_CAR_PDMS_MIN_XLOGP: f64 = 0.5;
pub const HIGHLY_POLAR_MAX_XLOGP: f64 = 1.0;
pub const HIGHLY_POLAR_MAX_MOLECULAR_WEIGHT: f64 = 200.0;

// --- Volatility breakpoints (boiling point, °C) ---
pub const VOLATILE_MAX_BOILING_POINT: f64 = 100.0;
pub const SEMI_VOLATILE_MAX_BOILING_POINT: f64 = 200.0;

// --- Diffusion breakpoints (molecular weight, g/mol) ---
pub const LIGHT_MAX_MOLECULAR_WEIGHT: f64 = 100.0;
pub const MEDIUM_MAX_MOLECULAR_WEIGHT: f64 = 300.0;

// --- Salting-out breakpoint (XLogP) ---
pub const SALTING_OUT_MAX_XLOGP: f64 = 2.0;

/// One `(predicate, outcome)` entry of a ranked rule table.
pub struct Rule<D, T> {
    pub label: &'static str,
    pub applies: fn(&D) -> bool,
    pub outcome: T,
}

/// An ordered list of rules evaluated first-match-wins.
pub struct RuleTable<D: 'static, T: 'static> {
    pub parameter: &'static str,
    pub rules: &'static [Rule<D, T>],
}

impl<D: 'static, T: 'static> RuleTable<D, T> {
    pub fn select(&self, driver: &D) -> Option<&'static Rule<D, T>> {
        self.rules.iter().find(|rule| (rule.applies)(driver))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiberDriver {
    pub xlogp: Option<f64>,
    pub molecular_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltDriver {
    pub xlogp: Option<f64>,
    pub any_charged: bool,
}

pub static FIBER: RuleTable<FiberDriver, Fiber> = RuleTable {
    parameter: "fiber coating",
    rules: &[
        Rule {
            label: "xlogp unknown",
            applies: |d| d.xlogp.is_none(),
            outcome: Fiber::CwDvbPa,
        },
        Rule {
            label: "xlogp <= 1.0 and mw < 200",
            applies: |d| {
                d.xlogp.is_some_and(|x| x <= HIGHLY_POLAR_MAX_XLOGP)
                    && d.molecular_weight < HIGHLY_POLAR_MAX_MOLECULAR_WEIGHT
            },
            outcome: Fiber::CapPdmsPegCw,
        },
        Rule {
            label: "xlogp > 3.0",
            applies: |d| d.xlogp.is_some_and(|x| x > PDMS_MIN_XLOGP),
            outcome: Fiber::Pdms,
        },
        Rule {
            label: "1.5 < xlogp <= 3.0",
            applies: |d| {
                d.xlogp
                    .is_some_and(|x| x > PDMS_DVB_MIN_XLOGP && x <= PDMS_MIN_XLOGP)
            },
            outcome: Fiber::PdmsDvb,
        },
        Rule {
            label: "0.5 < xlogp <= 1.5",
            applies: |d| {
                d.xlogp
                    .is_some_and(|x| x > DVB_CAR_PDMS_MIN_XLOGP && x <= PDMS_DVB_MIN_XLOGP)
            },
            outcome: Fiber::DvbCarPdms,
        },
        Rule {
            label: "xlogp <= 0.5",
            applies: |d| d.xlogp.is_some_and(|x| x <= DVB_CAR_PDMS_MIN_XLOGP),
            outcome: Fiber::CwDvbPa,
        },
    ],
};

pub static EXTRACTION_TEMPERATURE: RuleTable<Option<f64>, ParameterSetting> = RuleTable {
    parameter: "extraction temperature",
    rules: &[
        Rule {
            label: "boiling point unknown",
            applies: |bp| bp.is_none(),
            outcome: ParameterSetting::range(30.0, 40.0),
        },
        Rule {
            label: "bp < 100",
            applies: |bp| bp.is_some_and(|t| t < VOLATILE_MAX_BOILING_POINT),
            outcome: ParameterSetting::range(30.0, 40.0),
        },
        Rule {
            label: "100 <= bp <= 200",
            applies: |bp| {
                bp.is_some_and(|t| {
                    (VOLATILE_MAX_BOILING_POINT..=SEMI_VOLATILE_MAX_BOILING_POINT).contains(&t)
                })
            },
            outcome: ParameterSetting::range(40.0, 60.0),
        },
        Rule {
            label: "bp > 200",
            applies: |bp| bp.is_some_and(|t| t > SEMI_VOLATILE_MAX_BOILING_POINT),
            outcome: ParameterSetting::range(60.0, 80.0),
        },
    ],
};

pub static EXTRACTION_TIME: RuleTable<f64, ParameterSetting> = RuleTable {
    parameter: "extraction time",
    rules: &[
        Rule {
            label: "mw < 100",
            applies: |&mw| mw < LIGHT_MAX_MOLECULAR_WEIGHT,
            outcome: ParameterSetting::range(10.0, 20.0),
        },
        Rule {
            label: "100 <= mw <= 300",
            applies: |mw| (LIGHT_MAX_MOLECULAR_WEIGHT..=MEDIUM_MAX_MOLECULAR_WEIGHT).contains(mw),
            outcome: ParameterSetting::range(20.0, 30.0),
        },
        Rule {
            label: "mw > 300",
            applies: |&mw| mw > MEDIUM_MAX_MOLECULAR_WEIGHT,
            outcome: ParameterSetting::range(30.0, 60.0),
        },
    ],
};

pub static SALT_ADDITION: RuleTable<SaltDriver, ParameterSetting> = RuleTable {
    parameter: "salt addition",
    rules: &[
        // Charged species gain little from salting-out; overrides the XLogP branches.
        Rule {
            label: "charged override",
            applies: |d| d.any_charged,
            outcome: ParameterSetting::fixed(0.0),
        },
        Rule {
            label: "xlogp unknown",
            applies: |d| d.xlogp.is_none(),
            outcome: ParameterSetting::range(0.0, 10.0),
        },
        Rule {
            label: "xlogp < 2.0",
            applies: |d| d.xlogp.is_some_and(|x| x < SALTING_OUT_MAX_XLOGP),
            outcome: ParameterSetting::range(20.0, 30.0),
        },
        Rule {
            label: "xlogp >= 2.0",
            applies: |d| d.xlogp.is_some_and(|x| x >= SALTING_OUT_MAX_XLOGP),
            outcome: ParameterSetting::range(0.0, 10.0),
        },
    ],
};

pub static AGITATION_RATE: RuleTable<bool, ParameterSetting> = RuleTable {
    parameter: "agitation rate",
    rules: &[
        Rule {
            label: "high viscosity",
            applies: |&viscous| viscous,
            outcome: ParameterSetting::range(300.0, 500.0),
        },
        Rule {
            label: "low viscosity",
            applies: |&viscous| !viscous,
            outcome: ParameterSetting::range(600.0, 800.0),
        },
    ],
};
