use anyhow::{Context, Result};
use serde_json::{json, Map, Value as JsonValue};

use income_dashboard::charts::sentiment::SentimentDataset;

const FIRST_YEAR: i32 = 2015;
const LAST_YEAR: i32 = 2024;
const LABEL_FIELD: &str = "指标";

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in `[-spread, spread]`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

/// Compound growth from `start` at roughly `rate` per year, rounded to
/// `decimals`.
fn growth_row(label: &str, start: f64, rate: f64, decimals: i32, rng: &mut SimpleRng) -> JsonValue {
    let factor = 10f64.powi(decimals);
    let mut row = Map::new();
    row.insert(LABEL_FIELD.to_string(), json!(label));
    let mut value = start;
    for year in FIRST_YEAR..=LAST_YEAR {
        row.insert(format!("{year}年"), json!((value * factor).round() / factor));
        value *= 1.0 + rate + rng.jitter(rate * 0.2);
    }
    JsonValue::Object(row)
}

/// Year-over-year growth percentages of a `growth_row`.
fn yoy_row(label: &str, base: &JsonValue) -> JsonValue {
    let mut row = Map::new();
    row.insert(LABEL_FIELD.to_string(), json!(label));
    for year in FIRST_YEAR + 1..=LAST_YEAR {
        let prev = base[format!("{}年", year - 1)].as_f64().unwrap_or(0.0);
        let cur = base[format!("{year}年")].as_f64().unwrap_or(0.0);
        let pct = (cur - prev) / prev * 100.0;
        row.insert(format!("{year}年"), json!((pct * 10.0).round() / 10.0));
    }
    JsonValue::Object(row)
}

fn category(rows: Vec<JsonValue>) -> JsonValue {
    json!({ "data": rows })
}

fn income_category(prefix: &str, total: f64, rate: f64, rng: &mut SimpleRng) -> JsonValue {
    let income = growth_row(&format!("{prefix}居民人均可支配收入(元)"), total, rate, 0, rng);
    let growth = yoy_row(&format!("{prefix}居民人均可支配收入比上年增长(%)"), &income);
    let mut rows = vec![
        income,
        growth,
        growth_row(&format!("{prefix}居民人均可支配收入中位数(元)"), total * 0.88, rate, 0, rng),
    ];
    let shares = [
        ("工资性收入", 0.6),
        ("经营净收入", 0.15),
        ("财产净收入", 0.08),
        ("转移净收入", 0.17),
    ];
    for (source, share) in shares {
        rows.push(growth_row(
            &format!("{prefix}居民人均可支配{source}(元)"),
            total * share,
            rate,
            0,
            rng,
        ));
    }
    category(rows)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut root = Map::new();

    let national = growth_row("居民人均可支配收入(元)", 21966.0, 0.075, 0, &mut rng);
    let national_median = growth_row("居民人均可支配收入中位数(元)", 19281.0, 0.073, 0, &mut rng);
    root.insert("全国居民人均收入情况".into(), category(vec![national, national_median]));
    root.insert(
        "城镇居民人均收入情况".into(),
        income_category("城镇", 31195.0, 0.063, &mut rng),
    );
    root.insert(
        "农村居民人均收入情况".into(),
        income_category("农村", 11422.0, 0.080, &mut rng),
    );

    let quintiles = [
        ("低收入组人均可支配收入(元)", 5221.0, 0.07),
        ("中间偏下收入组人均可支配收入(元)", 11894.0, 0.072),
        ("中间收入组人均可支配收入(元)", 19320.0, 0.072),
        ("中间偏上收入组人均可支配收入(元)", 29438.0, 0.07),
        ("高收入组人均可支配收入(元)", 54544.0, 0.065),
    ];
    root.insert(
        "全国居民按收入五等份分组的收入情况".into(),
        category(
            quintiles
                .iter()
                .map(|(label, start, rate)| growth_row(label, *start, *rate, 0, &mut rng))
                .collect(),
        ),
    );
    root.insert(
        "居民人均可支配收入基尼系数".into(),
        category(vec![growth_row("居民人均可支配收入基尼系数", 0.462, 0.0005, 3, &mut rng)]),
    );
    root.insert(
        "居民恩格尔系数".into(),
        category(vec![
            growth_row("居民恩格尔系数(%)", 30.6, -0.003, 1, &mut rng),
            growth_row("城镇居民恩格尔系数(%)", 29.7, -0.003, 1, &mut rng),
            growth_row("农村居民恩格尔系数(%)", 33.0, -0.002, 1, &mut rng),
        ]),
    );

    let foods = [
        ("粮食(原粮)(千克)", 112.0, 145.0),
        ("蔬菜及食用菌(千克)", 104.0, 90.0),
        ("肉类(千克)", 28.9, 23.1),
        ("禽类(千克)", 9.4, 7.1),
        ("水产品(千克)", 14.7, 7.2),
        ("奶类(千克)", 17.1, 6.3),
    ];
    for (prefix, pick) in [("城镇", 0usize), ("农村", 1usize)] {
        let rows = foods
            .iter()
            .map(|f| {
                let start = if pick == 0 { f.1 } else { f.2 };
                growth_row(f.0, start, 0.015, 1, &mut rng)
            })
            .collect();
        root.insert(format!("{prefix}居民主要食品消费量"), category(rows));
    }

    let goods = [
        ("家用汽车(辆)", 30.0, 13.3),
        ("空调(台)", 114.6, 38.8),
        ("电冰箱(柜)(台)", 94.0, 82.6),
        ("洗衣机(台)", 92.3, 78.8),
        ("计算机(台)", 78.5, 25.7),
        ("移动电话(部)", 223.8, 226.1),
    ];
    for (prefix, pick) in [("城镇", 0usize), ("农村", 1usize)] {
        let rows = goods
            .iter()
            .map(|g| {
                let start = if pick == 0 { g.1 } else { g.2 };
                growth_row(g.0, start, 0.03, 1, &mut rng)
            })
            .collect();
        root.insert(
            format!("{prefix}居民平均每百户年末主要耐用消费品拥有量"),
            category(rows),
        );
    }

    let output_path = "data_processed.json";
    let text = serde_json::to_string_pretty(&JsonValue::Object(root))
        .context("serializing sample dataset")?;
    std::fs::write(output_path, text).context("writing sample dataset")?;

    let sentiment_path = "sentiment.json";
    let text = serde_json::to_string_pretty(&SentimentDataset::illustrative())
        .context("serializing sentiment input")?;
    std::fs::write(sentiment_path, text).context("writing sentiment input")?;

    println!(
        "Wrote sample dataset ({FIRST_YEAR}-{LAST_YEAR}) to {output_path} and sentiment input to {sentiment_path}"
    );
    Ok(())
}
