use serde::{Deserialize, Serialize};
use std::fmt;

/// 原始權重代碼：0 = 無權重，1-100 = 百分比，101 以上 = 分數表索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightCode(pub i64);

impl WeightCode {
    /// 第一個指向分數表的代碼 (101 -> 索引 0)
    pub const FIRST_TABLE_CODE: i64 = 101;

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for WeightCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 精確分數 (numerator, denominator)，分母 >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl ResolvedFraction {
    pub const ZERO: ResolvedFraction = ResolvedFraction {
        numerator: 0,
        denominator: 1,
    };

    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for ResolvedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// 第二項為第一項的補數 (HAVO: ED4 + ED5)
    TwoTerm,
    /// 兩個獨立項，第三項為補數 (VWO: ED4 + ED5 + ED6)
    ThreeTerm,
}

/// 組合後的權重：公分母與三個分子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedWeighting {
    pub mode: Mode,
    pub denominator: u64,
    pub numerators: [u64; 3],
}

impl CombinedWeighting {
    pub const TERM_LABELS: [&'static str; 3] = ["ED4", "ED5", "ED6"];

    /// 分母為 1 表示全部權重落在單一項，沒有需要說明的計算
    pub fn is_trivial(&self) -> bool {
        self.denominator == 1
    }

    pub fn numerator_sum(&self) -> u64 {
        self.numerators.iter().sum()
    }

    /// 例如 `(2x ED4 + 3x ED5) / 5`，省略分子為 0 的項
    pub fn formula(&self) -> String {
        let terms: Vec<String> = self
            .numerators
            .iter()
            .zip(Self::TERM_LABELS)
            .filter(|(numerator, _)| **numerator != 0)
            .map(|(numerator, label)| format!("{}x {}", numerator, label))
            .collect();

        format!("({}) / {}", terms.join(" + "), self.denominator)
    }
}

impl fmt::Display for CombinedWeighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.numerators;
        write!(f, "{}/{}/{}/{}", self.denominator, first, second, third)
    }
}

/// 學年 (klas)，數值與匯出 API 使用的 id 相同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leerjaar {
    Havo4,
    Havo5,
    Vwo3,
    Vwo4,
    Vwo5,
    Vwo6,
    OverstappersVwo5,
    OverstappersVwo6,
}

impl Leerjaar {
    pub const ALL: [Leerjaar; 8] = [
        Leerjaar::Havo4,
        Leerjaar::Havo5,
        Leerjaar::Vwo3,
        Leerjaar::Vwo4,
        Leerjaar::Vwo5,
        Leerjaar::Vwo6,
        Leerjaar::OverstappersVwo5,
        Leerjaar::OverstappersVwo6,
    ];

    pub fn id(self) -> u8 {
        match self {
            Leerjaar::Havo4 => 1,
            Leerjaar::Havo5 => 2,
            Leerjaar::Vwo4 => 3,
            Leerjaar::Vwo5 => 4,
            Leerjaar::Vwo6 => 5,
            Leerjaar::OverstappersVwo5 => 6,
            Leerjaar::OverstappersVwo6 => 7,
            Leerjaar::Vwo3 => 16,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|leerjaar| leerjaar.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Leerjaar::Havo4 => "4 Havo",
            Leerjaar::Havo5 => "5 Havo",
            Leerjaar::Vwo3 => "3 VWO",
            Leerjaar::Vwo4 => "4 VWO",
            Leerjaar::Vwo5 => "5 VWO",
            Leerjaar::Vwo6 => "6 VWO",
            Leerjaar::OverstappersVwo5 => "overstappers VWO 5",
            Leerjaar::OverstappersVwo6 => "overstappers VWO 6",
        }
    }

    /// 需要合併前幾年成績的學年才有 SE 權重模式
    pub fn weighting_mode(self) -> Option<Mode> {
        match self {
            Leerjaar::Havo5 => Some(Mode::TwoTerm),
            Leerjaar::Vwo5 | Leerjaar::Vwo6 => Some(Mode::ThreeTerm),
            _ => None,
        }
    }

    /// 這些學年只顯示單一權重標籤，不顯示 SE 計算公式
    pub fn uses_simple_weighting(self) -> bool {
        matches!(
            self,
            Leerjaar::Vwo3 | Leerjaar::Vwo4 | Leerjaar::Havo4 | Leerjaar::Vwo5
        )
    }
}

impl fmt::Display for Leerjaar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 分數表：代碼 101 對應索引 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FractionTable {
    entries: Vec<String>,
}

impl FractionTable {
    pub const STANDARD_ENTRIES: [&'static str; 12] = [
        "1/3", "2/3", "1/6", "5/6", "1/8", "3/8", "5/8", "7/8", "1/12", "5/12", "7/12", "11/12",
    ];

    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FractionTable {
    fn default() -> Self {
        Self::new(
            Self::STANDARD_ENTRIES
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
        )
    }
}

/// 匯出請求：年度與學年
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    pub jaar: i32,
    pub klas: Leerjaar,
}

impl ExportRequest {
    pub fn filename(&self) -> String {
        format!("export-{}-{}.docx", self.jaar, self.klas.id())
    }

    pub fn form_params(&self) -> [(&'static str, String); 2] {
        [
            ("jaar", self.jaar.to_string()),
            ("klas", self.klas.id().to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_weighting_display_always_has_four_fields() {
        let weighting = CombinedWeighting {
            mode: Mode::TwoTerm,
            denominator: 5,
            numerators: [2, 3, 0],
        };
        assert_eq!(weighting.to_string(), "5/2/3/0");
    }

    #[test]
    fn test_formula_skips_zero_terms() {
        let two_term = CombinedWeighting {
            mode: Mode::TwoTerm,
            denominator: 5,
            numerators: [2, 3, 0],
        };
        assert_eq!(two_term.formula(), "(2x ED4 + 3x ED5) / 5");

        let three_term = CombinedWeighting {
            mode: Mode::ThreeTerm,
            denominator: 6,
            numerators: [1, 0, 5],
        };
        assert_eq!(three_term.formula(), "(1x ED4 + 5x ED6) / 6");
    }

    #[test]
    fn test_leerjaar_ids_round_trip() {
        for leerjaar in Leerjaar::ALL {
            assert_eq!(Leerjaar::from_id(leerjaar.id()), Some(leerjaar));
        }
        assert_eq!(Leerjaar::from_id(0), None);
        assert_eq!(Leerjaar::from_id(8), None);
    }

    #[test]
    fn test_leerjaar_weighting_mode() {
        assert_eq!(Leerjaar::Havo5.weighting_mode(), Some(Mode::TwoTerm));
        assert_eq!(Leerjaar::Vwo6.weighting_mode(), Some(Mode::ThreeTerm));
        assert_eq!(Leerjaar::Havo4.weighting_mode(), None);
        assert_eq!(Leerjaar::OverstappersVwo6.weighting_mode(), None);
    }

    #[test]
    fn test_default_table_matches_standard_entries() {
        let table = FractionTable::default();
        assert_eq!(table.len(), 12);
        assert_eq!(table.entries()[0], "1/3");
        assert_eq!(table.entries()[11], "11/12");
    }

    #[test]
    fn test_export_request_filename() {
        let request = ExportRequest {
            jaar: 2019,
            klas: Leerjaar::Havo4,
        };
        assert_eq!(request.filename(), "export-2019-1.docx");
        assert_eq!(request.form_params()[1], ("klas", "1".to_string()));
    }
}
