/// Inclusive candidate range parsed from `LO..HI`, `LO..=HI`, or a single `N`.
///
/// Both bounds may be negative (`-10..10`). `LO > HI` parses fine and
/// describes an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeArg {
    pub lo: i32,
    pub hi: i32,
}

impl std::str::FromStr for RangeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        match s.split_once("..") {
            Some((lo, hi)) => {
                let hi = hi.strip_prefix('=').unwrap_or(hi);
                Ok(Self {
                    lo: parse_bound(lo)?,
                    hi: parse_bound(hi)?,
                })
            }
            None => {
                let n = parse_bound(&s)?;
                Ok(Self { lo: n, hi: n })
            }
        }
    }
}

fn parse_bound(s: &str) -> Result<i32, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("range bound is missing".to_string());
    }
    s.parse::<i32>()
        .map_err(|err| format!("invalid range bound '{s}': {err}"))
}
