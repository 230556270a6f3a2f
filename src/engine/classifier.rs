// ==========================================
// 厨房运营预测分析套件 - 食材分类器
// ==========================================
// 职责: 按显示名称将食材映射到缩放类别
// 实现: 显式有序规则表, 首个命中即停
// 规则表顺序是对外契约 (可测试), 不是隐式控制流
// ==========================================

use crate::domain::types::IngredientCategory;

/// 一条分类规则: 任一关键词 (小写) 命中即归入该类别
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub category: IngredientCategory,
    pub keywords: &'static [&'static str],
}

// 规则表, 自上而下匹配。顺序即契约:
// 1. Spice  2. Leavening  3. CookingFat  4. Liquid
// 未命中 → Standard (线性)
const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: IngredientCategory::Spice,
        keywords: &[
            "salz",
            "pfeffer",
            "gewürz",
            "chili",
            "curry",
            "paprikapulver",
            "zimt",
            "muskat",
            "kümmel",
            "koriander",
            "oregano",
            "thymian",
            "rosmarin",
            "basilikum",
            "majoran",
            "lorbeer",
            "nelke",
            "kräuter",
            "safran",
            "vanille",
            "salt",
            "pepper",
            "spice",
            "herb",
            "cumin",
            "nutmeg",
            "cinnamon",
            "clove",
        ],
    },
    ClassificationRule {
        category: IngredientCategory::Leavening,
        keywords: &[
            "hefe",
            "backpulver",
            "triebmittel",
            "natron",
            "sauerteig",
            "weinstein",
            "yeast",
            "baking powder",
            "baking soda",
            "sourdough",
        ],
    },
    ClassificationRule {
        category: IngredientCategory::CookingFat,
        keywords: &[
            "öl",
            "oel",
            "schmalz",
            "margarine",
            "frittierfett",
            "bratfett",
            "butter",
            "oil",
            "lard",
            "shortening",
        ],
    },
    ClassificationRule {
        category: IngredientCategory::Liquid,
        keywords: &[
            "brühe",
            "bruehe",
            "fond",
            "bouillon",
            "stock",
            "broth",
            "wasser",
            "water",
        ],
    },
];

// ==========================================
// IngredientClassifier - 食材分类器
// ==========================================
pub struct IngredientClassifier {
    rules: Vec<ClassificationRule>,
}

impl IngredientClassifier {
    /// 使用内置规则表构造
    pub fn new() -> Self {
        Self {
            rules: RULES.to_vec(),
        }
    }

    /// 使用自定义规则表构造 (顺序即匹配优先级)
    pub fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// 分类 (全函数: 任何输入都返回类别, 默认 Standard)
    ///
    /// # 参数
    /// - `name`: 食材显示名称 (大小写不敏感)
    ///
    /// # 返回
    /// 缩放类别
    pub fn classify(&self, name: &str) -> IngredientCategory {
        let normalized = name.to_lowercase();
        for rule in &self.rules {
            if rule
                .keywords
                .iter()
                .any(|keyword| normalized.contains(keyword))
            {
                return rule.category;
            }
        }
        IngredientCategory::Standard
    }
}

impl Default for IngredientClassifier {
    fn default() -> Self {
        Self::new()
    }
}
