//! HMS component identifier ("xname") validation
//!
//! An xname is a sequence of single-letter segments each followed by a
//! number, e.g. `x3000c0s17b1n0`. It is valid when its letter sequence is one
//! of the known component layouts. The cabinet number is 1-4 digits and the
//! chassis a single digit 0-7; every other index is any run of digits.
//! Comparison is case-insensitive.

/// Accepted digits for one segment
#[derive(Debug, Clone, Copy)]
enum Num {
    /// Any non-empty run of digits
    Any,
    /// One to N digits
    Digits(usize),
    /// A single digit no greater than N
    Digit(u8),
}

impl Num {
    fn accepts(self, digits: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Digits(max) => digits.len() <= max,
            Self::Digit(max) => digits.len() == 1 && digits.as_bytes()[0] - b'0' <= max,
        }
    }
}

const ANY: Num = Num::Any;
const X: (char, Num) = ('x', Num::Digits(4));
const C: (char, Num) = ('c', Num::Digit(7));

/// A component layout: the segment letters in order with the digits each accepts
struct Layout {
    name: &'static str,
    segments: &'static [(char, Num)],
}

const LAYOUTS: &[Layout] = &[
    Layout { name: "CDU", segments: &[('d', ANY)] },
    Layout { name: "CDUMgmtSwitch", segments: &[('d', ANY), ('w', ANY)] },
    Layout { name: "Cabinet", segments: &[X] },
    Layout { name: "CabinetBMC", segments: &[X, ('b', ANY)] },
    Layout { name: "CabinetCDU", segments: &[X, ('d', ANY)] },
    Layout { name: "CEC", segments: &[X, ('e', ANY)] },
    Layout { name: "CabinetPDUController", segments: &[X, ('m', ANY)] },
    Layout { name: "CabinetPDU", segments: &[X, ('m', ANY), ('p', ANY)] },
    Layout { name: "CabinetPDUOutlet", segments: &[X, ('m', ANY), ('p', ANY), ('j', ANY)] },
    Layout { name: "CabinetPDUPowerConnector", segments: &[X, ('m', ANY), ('p', ANY), ('v', ANY)] },
    Layout { name: "Chassis", segments: &[X, C] },
    Layout { name: "ChassisBMC", segments: &[X, C, ('b', ANY)] },
    Layout { name: "CMMRectifier", segments: &[X, C, ('t', ANY)] },
    Layout { name: "CMMFpga", segments: &[X, C, ('f', ANY)] },
    Layout { name: "MgmtSwitch", segments: &[X, C, ('w', ANY)] },
    Layout { name: "MgmtSwitchConnector", segments: &[X, C, ('w', ANY), ('j', ANY)] },
    Layout { name: "MgmtHLSwitchEnclosure", segments: &[X, C, ('h', ANY)] },
    Layout { name: "MgmtHLSwitch", segments: &[X, C, ('h', ANY), ('s', ANY)] },
    Layout { name: "ComputeModule", segments: &[X, C, ('s', ANY)] },
    Layout { name: "NodeEnclosure", segments: &[X, C, ('s', ANY), ('e', ANY)] },
    Layout { name: "NodePowerConnector", segments: &[X, C, ('s', ANY), ('v', ANY)] },
    Layout { name: "NodeBMC", segments: &[X, C, ('s', ANY), ('b', ANY)] },
    Layout { name: "NodeBMCNic", segments: &[X, C, ('s', ANY), ('b', ANY), ('i', ANY)] },
    Layout { name: "Node", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY)] },
    Layout { name: "Processor", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY), ('p', ANY)] },
    Layout { name: "Memory", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY), ('d', ANY)] },
    Layout { name: "NodeAccel", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY), ('a', ANY)] },
    Layout { name: "NodeAccelRiser", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY), ('r', ANY)] },
    Layout { name: "NodeHsnNic", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY), ('h', ANY)] },
    Layout { name: "NodeNic", segments: &[X, C, ('s', ANY), ('b', ANY), ('n', ANY), ('i', ANY)] },
    Layout { name: "RouterModule", segments: &[X, C, ('r', ANY)] },
    Layout { name: "RouterTOR", segments: &[X, C, ('r', ANY), ('t', ANY)] },
    Layout { name: "RouterBMC", segments: &[X, C, ('r', ANY), ('b', ANY)] },
    Layout { name: "RouterFpga", segments: &[X, C, ('r', ANY), ('f', ANY)] },
    Layout { name: "HSNBoard", segments: &[X, C, ('r', ANY), ('e', ANY)] },
    Layout { name: "HSNAsic", segments: &[X, C, ('r', ANY), ('a', ANY)] },
    Layout { name: "HSNConnector", segments: &[X, C, ('r', ANY), ('j', ANY)] },
    Layout { name: "HSNConnectorPort", segments: &[X, C, ('r', ANY), ('j', ANY), ('p', ANY)] },
];

/// Split a lower-cased xname into (letter, number) segments.
///
/// Returns `None` if the string is not strictly letter-then-digits repeated.
fn segments(xname: &str) -> Option<Vec<(char, &str)>> {
    let mut out = Vec::new();
    let mut rest = xname;

    while let Some(letter) = rest.chars().next() {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let tail = &rest[1..];
        let len = tail.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        out.push((letter, &tail[..len]));
        rest = &tail[len..];
    }

    Some(out)
}

/// Name of the component type an xname identifies, if any
pub fn component_type(xname: &str) -> Option<&'static str> {
    let normalized = xname.to_ascii_lowercase();
    if normalized == "s0" {
        return Some("System");
    }

    let parsed = segments(&normalized)?;
    LAYOUTS
        .iter()
        .find(|layout| {
            layout.segments.len() == parsed.len()
                && layout
                    .segments
                    .iter()
                    .zip(&parsed)
                    .all(|(&(letter, num), &(got, digits))| letter == got && num.accepts(digits))
        })
        .map(|layout| layout.name)
}

/// Whether `xname` is a well-formed HMS component identifier
pub fn is_valid(xname: &str) -> bool {
    component_type(xname).is_some()
}
