//! The closed movement verb and builtin tables.
//!
//! Every movement verb name maps to a structured descriptor. Simple verbs
//! follow the grammar `[sneak](walk|sprint|stop|)(|jump|air)[45]`, where an
//! omitted gait means walk; composites (`*pessi`, `forcemomentum`,
//! `*strafejump`) are listed explicitly. The table is built once and every
//! valid name is enumerable through [`verb_names`].

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// How many arguments a callee accepts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Exactly(usize),
    /// Zero up to `n` optional arguments.
    UpTo(usize),
    /// Any number; arguments are consumed while the lookahead can start one.
    Variadic,
}

impl Arity {
    /// Upper bound on arguments the parser should consume.
    pub const fn max(self) -> Option<usize> {
        match self {
            Arity::Exactly(n) | Arity::UpTo(n) => Some(n),
            Arity::Variadic => None,
        }
    }

    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::UpTo(n) => count <= n,
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::UpTo(n) => write!(f, "at most {n}"),
            Arity::Variadic => f.write_str("any number of"),
        }
    }
}

/// Which movement keys are held.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Gait {
    Walk,
    Sprint,
    /// No movement input at all.
    Stop,
}

/// Movement state requested for a verb.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Motion {
    Ground,
    /// One jump tick, then airborne for the rest of the duration.
    Jump,
    Air,
}

/// Descriptor of a simple movement verb.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MoveShape {
    pub sneak: bool,
    pub gait: Gait,
    pub motion: Motion,
    /// Facing offset of 45 degrees with the `wa` input mask.
    pub strafe45: bool,
}

impl MoveShape {
    /// Canonical spelling, with the gait always written out.
    pub fn name(self) -> String {
        let mut name = String::new();
        if self.sneak {
            name.push_str("sneak");
        }
        name.push_str(match self.gait {
            Gait::Walk => "walk",
            Gait::Sprint => "sprint",
            Gait::Stop => "stop",
        });
        name.push_str(match self.motion {
            Motion::Ground => "",
            Motion::Jump => "jump",
            Motion::Air => "air",
        });
        if self.strafe45 {
            name.push_str("45");
        }
        name
    }
}

/// A movement verb.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VerbKind {
    Move(MoveShape),
    /// Stop-jump for `delay` ticks, then air movement for the rest.
    Pessi { sprint: bool, strafe45: bool },
    /// Walk-jump for `delay` ticks, then sprint-air for the rest.
    ForceMomentum { strafe45: bool },
    /// Sprint jump at the optimal strafe angle, then sprint-air.
    StrafeJump { sneak: bool, strafe45: bool },
}

impl VerbKind {
    pub const fn arity(self) -> Arity {
        match self {
            VerbKind::Move(MoveShape {
                gait: Gait::Stop, ..
            }) => Arity::UpTo(1),
            VerbKind::Move(_) | VerbKind::StrafeJump { .. } => Arity::UpTo(2),
            VerbKind::Pessi { .. } | VerbKind::ForceMomentum { .. } => Arity::UpTo(3),
        }
    }
}

/// Non-movement builtins.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    OutX,
    OutZ,
    OutVx,
    OutVz,
    SetX,
    SetZ,
    SetVx,
    SetVz,
    Facing,
    Print,
    Reset,
    Precision,
    Slip,
    Speed,
    Slowness,
    Water,
    Lava,
    Web,
    Block,
    Ladder,
    Soulsand,
    SneakDelay,
    AirSprintDelay,
    Reverse,
    Inertia,
}

impl Builtin {
    pub const ALL: [Builtin; 25] = [
        Builtin::OutX,
        Builtin::OutZ,
        Builtin::OutVx,
        Builtin::OutVz,
        Builtin::SetX,
        Builtin::SetZ,
        Builtin::SetVx,
        Builtin::SetVz,
        Builtin::Facing,
        Builtin::Print,
        Builtin::Reset,
        Builtin::Precision,
        Builtin::Slip,
        Builtin::Speed,
        Builtin::Slowness,
        Builtin::Water,
        Builtin::Lava,
        Builtin::Web,
        Builtin::Block,
        Builtin::Ladder,
        Builtin::Soulsand,
        Builtin::SneakDelay,
        Builtin::AirSprintDelay,
        Builtin::Reverse,
        Builtin::Inertia,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::OutX => "outx",
            Builtin::OutZ => "outz",
            Builtin::OutVx => "outvx",
            Builtin::OutVz => "outvz",
            Builtin::SetX => "setx",
            Builtin::SetZ => "setz",
            Builtin::SetVx => "setvx",
            Builtin::SetVz => "setvz",
            Builtin::Facing => "facing",
            Builtin::Print => "print",
            Builtin::Reset => "reset",
            Builtin::Precision => "precision",
            Builtin::Slip => "slip",
            Builtin::Speed => "speed",
            Builtin::Slowness => "slowness",
            Builtin::Water => "water",
            Builtin::Lava => "lava",
            Builtin::Web => "web",
            Builtin::Block => "block",
            Builtin::Ladder => "ladder",
            Builtin::Soulsand => "soulsand",
            Builtin::SneakDelay => "sneakdelay",
            Builtin::AirSprintDelay => "airsprintdelay",
            Builtin::Reverse => "reverse",
            Builtin::Inertia => "inertia",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    pub const fn arity(self) -> Arity {
        match self {
            Builtin::OutX
            | Builtin::OutZ
            | Builtin::OutVx
            | Builtin::OutVz
            | Builtin::Facing
            | Builtin::Water
            | Builtin::Lava
            | Builtin::Web
            | Builtin::Block
            | Builtin::Ladder
            | Builtin::Soulsand
            | Builtin::SneakDelay
            | Builtin::AirSprintDelay
            | Builtin::Reverse
            | Builtin::Inertia => Arity::UpTo(1),
            Builtin::SetX
            | Builtin::SetZ
            | Builtin::SetVx
            | Builtin::SetVz
            | Builtin::Precision
            | Builtin::Slip
            | Builtin::Speed
            | Builtin::Slowness => Arity::Exactly(1),
            Builtin::Print => Arity::Variadic,
            Builtin::Reset => Arity::Exactly(0),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn verb_table() -> &'static FxHashMap<String, VerbKind> {
    static TABLE: OnceLock<FxHashMap<String, VerbKind>> = OnceLock::new();
    TABLE.get_or_init(build_verb_table)
}

fn build_verb_table() -> FxHashMap<String, VerbKind> {
    let mut table = FxHashMap::default();

    for sneak in [false, true] {
        for gait in [Gait::Walk, Gait::Sprint, Gait::Stop] {
            for motion in [Motion::Ground, Motion::Jump, Motion::Air] {
                for strafe45 in [false, true] {
                    if gait == Gait::Stop && strafe45 {
                        continue;
                    }
                    let shape = MoveShape {
                        sneak,
                        gait,
                        motion,
                        strafe45,
                    };
                    let name = shape.name();
                    if gait == Gait::Walk {
                        // "walk" may be omitted: jump, sneakair45, ...
                        let short = name.replacen("walk", "", 1);
                        if !short.is_empty() && short != "45" {
                            table.insert(short, VerbKind::Move(shape));
                        }
                    }
                    table.insert(name, VerbKind::Move(shape));
                }
            }
        }
    }

    for strafe45 in [false, true] {
        let suffix = if strafe45 { "45" } else { "" };
        for sprint in [false, true] {
            let gait = if sprint { "sprint" } else { "walk" };
            table.insert(
                format!("{gait}pessi{suffix}"),
                VerbKind::Pessi { sprint, strafe45 },
            );
        }
        table.insert(
            format!("forcemomentum{suffix}"),
            VerbKind::ForceMomentum { strafe45 },
        );
        for sneak in [false, true] {
            let prefix = if sneak { "sneak" } else { "" };
            table.insert(
                format!("{prefix}sprintstrafejump{suffix}"),
                VerbKind::StrafeJump { sneak, strafe45 },
            );
        }
    }

    table
}

/// Look up a movement verb by name.
pub fn lookup_verb(name: &str) -> Option<VerbKind> {
    verb_table().get(name).copied()
}

/// Every movement verb name, in no particular order.
pub fn verb_names() -> impl Iterator<Item = &'static str> {
    verb_table().keys().map(String::as_str)
}
