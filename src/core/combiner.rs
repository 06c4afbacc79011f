use crate::core::{CombinedWeighting, Mode, ResolvedFraction};
use crate::utils::error::{PtaError, Result};
use crate::utils::gcd::gcd;

/// 將兩個分數放到公分母上，依模式計算補數項，最後整體一次約分。
///
/// 明確給定的項超過整體時回傳 `OvercommittedWeighting`；
/// 約分除數為 0，或三項模式下兩個明確項皆為 0 時回傳 `DegenerateWeighting`。
pub fn combine(mode: Mode, f1: ResolvedFraction, f2: ResolvedFraction) -> Result<CombinedWeighting> {
    let (n1, d1) = (u64::from(f1.numerator), u64::from(f1.denominator));
    let (n2, d2) = (u64::from(f2.numerator), u64::from(f2.denominator));

    // u32 * u32 不會溢位 u64
    let denominator = d1 * d2;
    let first = d2 * n1;

    let (second, third, divisor) = match mode {
        Mode::TwoTerm => {
            let second = denominator
                .checked_sub(first)
                .ok_or(PtaError::OvercommittedWeighting {
                    assigned: first,
                    denominator,
                })?;
            (second, 0, gcd(first, second))
        }
        Mode::ThreeTerm => {
            let second = d1 * n2;
            if first == 0 && second == 0 {
                return Err(PtaError::DegenerateWeighting);
            }
            let assigned = first
                .checked_add(second)
                .filter(|assigned| *assigned <= denominator)
                .ok_or(PtaError::OvercommittedWeighting {
                    assigned: first.saturating_add(second),
                    denominator,
                })?;
            let third = denominator - assigned;
            (second, third, gcd(gcd(first, second), third))
        }
    };

    if divisor == 0 {
        return Err(PtaError::DegenerateWeighting);
    }

    Ok(CombinedWeighting {
        mode,
        denominator: denominator / divisor,
        numerators: [first / divisor, second / divisor, third / divisor],
    })
}
