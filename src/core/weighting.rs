use crate::core::resolver::{describe, resolve};
use crate::core::{combine, CombinedWeighting, FractionSource, FractionTable, Leerjaar, Mode, WeightCode};
use crate::utils::error::{PtaError, Result};

/// SE 權重計算：持有唯讀分數表，依序解析代碼並合併
pub struct WeightingEngine<T: FractionSource = FractionTable> {
    table: T,
}

impl<T: FractionSource> WeightingEngine<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn compute(&self, mode: Mode, code1: WeightCode, code2: WeightCode) -> Result<CombinedWeighting> {
        tracing::debug!("Computing {:?} weighting for codes {} and {}", mode, code1, code2);

        let result = resolve(code1, &self.table)
            .and_then(|f1| resolve(code2, &self.table).map(|f2| (f1, f2)))
            .and_then(|(f1, f2)| {
                tracing::debug!("Resolved fractions: {} and {}", f1, f2);
                combine(mode, f1, f2)
            });

        match &result {
            Ok(weighting) => tracing::debug!("Reduced weighting: {}", weighting),
            Err(e) => tracing::warn!("⚠️ Weighting failed for codes {} and {}: {}", code1, code2, e),
        }

        result
    }

    /// 依學年決定模式；沒有 SE 權重的學年或退化的權重回傳 `None`
    pub fn compute_for_leerjaar(
        &self,
        leerjaar: Leerjaar,
        code1: WeightCode,
        code2: WeightCode,
    ) -> Result<Option<CombinedWeighting>> {
        let Some(mode) = leerjaar.weighting_mode() else {
            tracing::debug!("{} has no SE weighting", leerjaar);
            return Ok(None);
        };

        match self.compute(mode, code1, code2) {
            Ok(weighting) => Ok(Some(weighting)),
            Err(PtaError::DegenerateWeighting) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// SE 成績計算說明，例如 `berekening SE cijfer: (2x ED4 + 3x ED5) / 5`
    pub fn formula(
        &self,
        leerjaar: Leerjaar,
        code1: WeightCode,
        code2: WeightCode,
    ) -> Result<Option<String>> {
        if leerjaar.uses_simple_weighting() {
            return Ok(None);
        }

        let Some(weighting) = self.compute_for_leerjaar(leerjaar, code1, code2)? else {
            return Ok(None);
        };

        if weighting.is_trivial() {
            return Ok(None);
        }

        Ok(Some(format!("berekening SE cijfer: {}", weighting.formula())))
    }

    pub fn describe(&self, code: WeightCode) -> Result<Option<String>> {
        describe(code, &self.table)
    }
}

impl Default for WeightingEngine<FractionTable> {
    fn default() -> Self {
        Self::new(FractionTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> WeightingEngine {
        WeightingEngine::default()
    }

    #[test]
    fn test_havo_5_weighting() {
        let engine = engine();
        let weighting = engine
            .compute_for_leerjaar(Leerjaar::Havo5, WeightCode(40), WeightCode(0))
            .unwrap()
            .unwrap();

        assert_eq!(weighting.mode, Mode::TwoTerm);
        assert_eq!(weighting.to_string(), "5/2/3/0");
    }

    #[test]
    fn test_year_four_has_no_weighting() {
        let engine = engine();
        let weighting = engine
            .compute_for_leerjaar(Leerjaar::Havo4, WeightCode(40), WeightCode(0))
            .unwrap();
        assert!(weighting.is_none());
    }

    #[test]
    fn test_degenerate_weighting_means_no_se_weighting() {
        let engine = engine();
        let weighting = engine
            .compute_for_leerjaar(Leerjaar::Vwo6, WeightCode(0), WeightCode(0))
            .unwrap();
        assert!(weighting.is_none());

        // HAVO 5 第一項為 0：全部權重落在 ED5
        let weighting = engine
            .compute_for_leerjaar(Leerjaar::Havo5, WeightCode(0), WeightCode(40))
            .unwrap()
            .unwrap();
        assert_eq!(weighting.to_string(), "1/0/1/0");
        assert_eq!(engine.formula(Leerjaar::Havo5, WeightCode(0), WeightCode(40)).unwrap(), None);
    }

    #[test]
    fn test_formula_text() {
        let engine = engine();

        assert_eq!(
            engine.formula(Leerjaar::Havo5, WeightCode(40), WeightCode(0)).unwrap(),
            Some("berekening SE cijfer: (2x ED4 + 3x ED5) / 5".to_string())
        );
        // 1/3 ED4 + 1/3 ED5 + 1/3 ED6
        assert_eq!(
            engine.formula(Leerjaar::Vwo6, WeightCode(101), WeightCode(101)).unwrap(),
            Some("berekening SE cijfer: (1x ED4 + 1x ED5 + 1x ED6) / 3".to_string())
        );
    }

    #[test]
    fn test_formula_is_absent_when_nothing_to_explain() {
        let engine = engine();

        // 簡單權重的學年
        assert_eq!(engine.formula(Leerjaar::Vwo5, WeightCode(40), WeightCode(30)).unwrap(), None);
        // 約分後分母為 1
        assert_eq!(engine.formula(Leerjaar::Havo5, WeightCode(100), WeightCode(0)).unwrap(), None);
        // 退化
        assert_eq!(engine.formula(Leerjaar::Vwo6, WeightCode(0), WeightCode(0)).unwrap(), None);
    }

    #[test]
    fn test_formula_propagates_lookup_errors() {
        let engine = engine();
        let err = engine.formula(Leerjaar::Vwo6, WeightCode(150), WeightCode(0)).unwrap_err();
        assert!(matches!(err, PtaError::TableLookupError { code: 150, .. }));
    }

    #[test]
    fn test_custom_table() {
        let engine = WeightingEngine::new(vec!["1/4".to_string()]);
        assert_eq!(engine.table().len(), 1);
        let weighting = engine
            .compute(Mode::ThreeTerm, WeightCode(101), WeightCode(50))
            .unwrap();
        // D = 400, N1 = 100, N2 = 200, N3 = 100
        assert_eq!(weighting.to_string(), "4/1/2/1");
    }
}
