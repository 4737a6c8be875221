use super::*;
use crate::common::*;
use crate::roll::value::CheckVector;

/// Symbol dice of a narrative system: `NeX` for Edge of the Empire, `NwX`
/// for Warhammer Fantasy Roleplay. Every face is a `/`-separated list of
/// symbols, and each symbol moves the check vector.
pub struct Narrative {
    kind: CheckKind,
    pattern: Regex,
}

type FaceTable = (&'static str, &'static [&'static str]);

const EOTE_DICE: &[FaceTable] = &[
    ("A", &["-", "S", "S", "S/S", "A", "A", "S/A", "A/A"]),
    ("B", &["-", "-", "A/A", "A", "S/A", "S"]),
    (
        "C",
        &["-", "F", "F", "F/F", "F/F", "Th", "Th", "F/Th", "F/Th", "Th/Th", "Th/Th", "D"],
    ),
    ("D", &["-", "F", "F/F", "Th", "Th", "Th", "Th/Th", "F/Th"]),
    (
        "F",
        &["DS", "DS", "DS", "DS", "DS", "DS", "DS/DS", "LS", "LS", "LS/LS", "LS/LS", "LS/LS"],
    ),
    (
        "P",
        &["-", "S", "S", "S/S", "S/S", "A", "S/A", "S/A", "S/A", "A/A", "A/A", "Tr"],
    ),
    ("S", &["-", "-", "F", "F", "Th", "Th"]),
];

const WFRP_DICE: &[FaceTable] = &[
    ("B", &["-", "-", "S", "S", "S", "S", "Bo", "Bo"]),
    ("G", &["-", "S", "S", "S", "S", "Bo", "Bo", "S/Bo", "S/D", "S/D"]),
    ("K", &["-", "-", "-", "C", "C", "Ba"]),
    ("P", &["-", "C", "C", "C/C", "C/C", "Ba", "Ba/Ba", "CS"]),
    ("R", &["-", "-", "S/S", "S/S", "Bo/Bo", "S/Bo", "Ba", "Ba", "S/E", "S/E"]),
    ("W", &["-", "-", "-", "S", "S", "Bo"]),
    ("Y", &["-", "S", "RS", "Bo", "Bo", "SC"]),
];

/// What a single symbol does to the vector, and whether it grants a bonus die.
fn apply(kind: CheckKind, symbol: &str, counts: &mut [Int; 6]) -> bool {
    match (kind, symbol) {
        (CheckKind::EdgeOfTheEmpire, "S") => counts[0] += 1,
        (CheckKind::EdgeOfTheEmpire, "F") => counts[0] -= 1,
        (CheckKind::EdgeOfTheEmpire, "A") => counts[1] += 1,
        (CheckKind::EdgeOfTheEmpire, "Th") => counts[1] -= 1,
        (CheckKind::EdgeOfTheEmpire, "Tr") => {
            counts[2] += 1;
            counts[0] += 1;
        }
        (CheckKind::EdgeOfTheEmpire, "D") => {
            counts[3] += 1;
            counts[0] -= 1;
        }
        (CheckKind::EdgeOfTheEmpire, "LS") => counts[4] += 1,
        (CheckKind::EdgeOfTheEmpire, "DS") => counts[5] += 1,

        (CheckKind::Warhammer, "S") => counts[0] += 1,
        (CheckKind::Warhammer, "RS") => {
            counts[0] += 1;
            return true;
        }
        (CheckKind::Warhammer, "C") => counts[0] -= 1,
        (CheckKind::Warhammer, "Bo") => counts[1] += 1,
        (CheckKind::Warhammer, "Ba") => counts[1] -= 1,
        (CheckKind::Warhammer, "D") => counts[2] += 1,
        (CheckKind::Warhammer, "E") => counts[3] += 1,
        (CheckKind::Warhammer, "SC") => counts[4] += 1,
        (CheckKind::Warhammer, "CS") => counts[5] += 1,
        _ => {}
    }
    false
}

impl Narrative {
    pub fn new(kind: CheckKind) -> Self {
        let pattern = match kind {
            CheckKind::EdgeOfTheEmpire => r"^([0-9]+)e(A|B|C|D|F|P|S)$",
            CheckKind::Warhammer => r"^([0-9]+)w(B|G|K|P|R|W|Y)$",
        };
        Self {
            kind,
            pattern: compile(pattern),
        }
    }

    fn faces(&self, die: &str) -> Result<&'static [&'static str]> {
        let table = match self.kind {
            CheckKind::EdgeOfTheEmpire => EOTE_DICE,
            CheckKind::Warhammer => WFRP_DICE,
        };
        table
            .iter()
            .find(|(name, _)| *name == die)
            .map(|(_, faces)| *faces)
            .ok_or(EvalError::Syntax)
    }
}

impl Resolve for Narrative {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        let mut num = parse_count(&caps[1]);
        let die = &caps[2];
        let faces = self.faces(die)?;
        let max_dice = ctx.limits().max_dice_per_roll;
        ctx.limits().check_dice(num)?;

        let mut counts = [0; 6];
        let mut detail = Vec::new();
        let mut symbols = Vec::new();
        let mut i = 0;
        while i < num {
            let face = faces[(ctx.roll(faces.len() as Int) - 1) as usize];
            for symbol in face.split('/') {
                if apply(self.kind, symbol, &mut counts) && num < max_dice {
                    num += 1;
                }
            }
            detail.push(face);
            symbols.push(
                format!(
                    "{}/{}-{}.png",
                    self.kind.symbol_prefix(),
                    die,
                    face.replace('/', "-")
                )
                .to_lowercase(),
            );
            i += 1;
        }

        let check = CheckVector::new(self.kind, counts);
        Ok(ResolvedTerm::itemized(check, term, detail, symbols))
    }
}
