use crate::core::{FractionSource, ResolvedFraction, WeightCode};
use crate::utils::error::{PtaError, Result};

/// 將權重代碼轉換為精確分數。
///
/// - `0` -> `(0, 1)`，零權重不會產生退化的分母
/// - `1..=100` -> `(code, 100)`
/// - `101..` -> 分數表第 `code - 101` 筆，原樣回傳不約分
pub fn resolve<T: FractionSource + ?Sized>(code: WeightCode, table: &T) -> Result<ResolvedFraction> {
    match code.value() {
        c if c < 0 => Err(PtaError::InvalidWeightCode { code: c }),
        0 => Ok(ResolvedFraction::ZERO),
        c @ 1..=100 => Ok(ResolvedFraction::new(c as u32, 100)),
        c => {
            let entry = table_entry(code, table)?;
            parse_fraction(entry).map_err(|reason| PtaError::TableLookupError { code: c, reason })
        }
    }
}

/// 單一權重的簡短標籤：`40%`、`1/3`，零權重則為 `None`
pub fn describe<T: FractionSource + ?Sized>(code: WeightCode, table: &T) -> Result<Option<String>> {
    match code.value() {
        c if c < 0 => Err(PtaError::InvalidWeightCode { code: c }),
        0 => Ok(None),
        c @ 1..=100 => Ok(Some(format!("{}%", c))),
        c => {
            let entry = table_entry(code, table)?;
            parse_fraction(entry).map_err(|reason| PtaError::TableLookupError { code: c, reason })?;
            Ok(Some(entry.trim().to_string()))
        }
    }
}

fn table_entry<T: FractionSource + ?Sized>(code: WeightCode, table: &T) -> Result<&str> {
    let code = code.value();
    let index = usize::try_from(code - WeightCode::FIRST_TABLE_CODE).map_err(|_| {
        PtaError::TableLookupError {
            code,
            reason: "code does not refer to the fraction table".to_string(),
        }
    })?;

    table.entry(index).ok_or_else(|| PtaError::TableLookupError {
        code,
        reason: format!(
            "index {} is out of range (table has {} entries)",
            index,
            table.len()
        ),
    })
}

/// 解析 `t/n` 格式的分數表項目
pub fn parse_fraction(entry: &str) -> std::result::Result<ResolvedFraction, String> {
    let mut parts = entry.split('/');
    let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
        (Some(numerator), Some(denominator), None) => (numerator.trim(), denominator.trim()),
        _ => return Err(format!("'{}' is not in numerator/denominator form", entry)),
    };

    let numerator: u32 = numerator
        .parse()
        .map_err(|e| format!("invalid numerator '{}': {}", numerator, e))?;
    let denominator: u32 = denominator
        .parse()
        .map_err(|e| format!("invalid denominator '{}': {}", denominator, e))?;

    if denominator == 0 {
        return Err(format!("'{}' has a zero denominator", entry));
    }

    Ok(ResolvedFraction::new(numerator, denominator))
}
