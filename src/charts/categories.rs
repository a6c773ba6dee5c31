//! Category names of the processed statistics export.

pub const NATIONAL_INCOME: &str = "全国居民人均收入情况";
pub const URBAN_INCOME: &str = "城镇居民人均收入情况";
pub const RURAL_INCOME: &str = "农村居民人均收入情况";
pub const INCOME_QUINTILES: &str = "全国居民按收入五等份分组的收入情况";
pub const GINI: &str = "居民人均可支配收入基尼系数";
pub const ENGEL: &str = "居民恩格尔系数";
pub const URBAN_FOOD: &str = "城镇居民主要食品消费量";
pub const RURAL_FOOD: &str = "农村居民主要食品消费量";
pub const URBAN_DURABLES: &str = "城镇居民平均每百户年末主要耐用消费品拥有量";
pub const RURAL_DURABLES: &str = "农村居民平均每百户年末主要耐用消费品拥有量";
