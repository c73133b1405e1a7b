// src/services/analytics_service.rs

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{CountBreakdown, DashboardStats, RevenueBreakdown, TopSellerEntry},
    sale::Sale,
};

const TOP_SELLERS_LIMIT: usize = 10;

// Acumulador transiente por produto, usado só para montar o ranking.
struct ProductAggregate {
    product_name: String,
    total_units: i64,
    total_revenue: Decimal,
}

// Totais de uma janela de agregação.
struct WindowTotals {
    revenue: Decimal,
    units: i64,
    distinct_products: i64,
}

// --- Agregação do dashboard ---
// `now` é parâmetro explícito: o componente é puro e testável sem relógio.
// As três janelas são recomputadas de forma independente sobre o mesmo
// conjunto de vendas, cada uma com seu próprio filtro de início.
pub fn aggregate(sales: &[Sale], now: DateTime<Utc>) -> DashboardStats {
    // Janelas em UTC: hoje começa à meia-noite, o mês no dia 1.
    let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let month_start = today_start.with_day(1).unwrap_or(today_start);

    let today = window_totals(sales, Some(today_start));
    let month = window_totals(sales, Some(month_start));
    let all_time = window_totals(sales, None);

    DashboardStats {
        total_revenue: RevenueBreakdown {
            today: today.revenue,
            month: month.revenue,
            all_time: all_time.revenue,
        },
        total_units: CountBreakdown {
            today: today.units,
            month: month.units,
            all_time: all_time.units,
        },
        distinct_products: CountBreakdown {
            today: today.distinct_products,
            month: month.distinct_products,
            all_time: all_time.distinct_products,
        },
        top_sellers: top_sellers(sales),
    }
}

// Filtro só por início (>=), sem teto: uma venda com data futura em
// relação a `now` ainda conta como "hoje".
fn window_totals(sales: &[Sale], start: Option<DateTime<Utc>>) -> WindowTotals {
    let mut revenue = Decimal::ZERO;
    let mut units: i64 = 0;
    let mut codes: HashSet<&str> = HashSet::new();

    for sale in sales {
        if let Some(start) = start {
            if sale.timestamp < start {
                continue;
            }
        }
        revenue += sale.price_at_sale * Decimal::from(sale.quantity);
        units += i64::from(sale.quantity);
        codes.insert(sale.product_code.as_str());
    }

    WindowTotals { revenue, units, distinct_products: codes.len() as i64 }
}

// Ranking sobre todo o período. O nome do produto vem do primeiro
// registro visto para cada código. Empate em receita desempata por
// código ascendente, para que a ordem seja determinística.
fn top_sellers(sales: &[Sale]) -> Vec<TopSellerEntry> {
    let mut by_code: HashMap<&str, ProductAggregate> = HashMap::new();

    for sale in sales {
        let entry = by_code
            .entry(sale.product_code.as_str())
            .or_insert_with(|| ProductAggregate {
                product_name: sale.product_name.clone(),
                total_units: 0,
                total_revenue: Decimal::ZERO,
            });
        entry.total_units += i64::from(sale.quantity);
        entry.total_revenue += sale.price_at_sale * Decimal::from(sale.quantity);
    }

    let mut ranking: Vec<TopSellerEntry> = by_code
        .into_iter()
        .map(|(code, totals)| TopSellerEntry {
            product_code: code.to_string(),
            product_name: totals.product_name,
            total_units: totals.total_units,
            total_revenue: totals.total_revenue,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.total_revenue
            .cmp(&a.total_revenue)
            .then_with(|| a.product_code.cmp(&b.product_code))
    });
    ranking.truncate(TOP_SELLERS_LIMIT);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap()
    }

    fn sale(code: &str, name: &str, price: i64, quantity: i32, timestamp: DateTime<Utc>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            product_code: code.to_string(),
            product_name: name.to_string(),
            price_at_sale: Decimal::from(price),
            color_at_sale: "red (#ff0000)".to_string(),
            quantity,
            timestamp,
        }
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        let stats = aggregate(&[], fixed_now());
        assert_eq!(stats.total_revenue.today, Decimal::ZERO);
        assert_eq!(stats.total_revenue.month, Decimal::ZERO);
        assert_eq!(stats.total_revenue.all_time, Decimal::ZERO);
        assert_eq!(stats.total_units.all_time, 0);
        assert_eq!(stats.distinct_products.all_time, 0);
        assert!(stats.top_sellers.is_empty());
    }

    #[test]
    fn same_day_sales_match_across_windows() {
        let now = fixed_now();
        let ts = Utc.with_ymd_and_hms(2025, 8, 15, 9, 30, 0).unwrap();
        let sales = vec![
            sale("SH-0001", "Xale Vermelho", 50, 2, ts), // receita 100
            sale("SH-0002", "Xale Azul", 50, 1, ts),     // receita 50
        ];

        let stats = aggregate(&sales, now);

        assert_eq!(stats.total_revenue.today, Decimal::from(150));
        assert_eq!(stats.total_revenue.month, Decimal::from(150));
        assert_eq!(stats.total_revenue.all_time, Decimal::from(150));
        assert_eq!(stats.total_units.today, 3);
        assert_eq!(stats.distinct_products.today, 2);

        // Ranking por receita: A (100) antes de B (50).
        let codes: Vec<&str> =
            stats.top_sellers.iter().map(|e| e.product_code.as_str()).collect();
        assert_eq!(codes, vec!["SH-0001", "SH-0002"]);
    }

    #[test]
    fn windows_filter_by_start_instant() {
        let now = fixed_now();
        let today = Utc.with_ymd_and_hms(2025, 8, 15, 8, 0, 0).unwrap();
        let earlier_this_month = Utc.with_ymd_and_hms(2025, 8, 5, 8, 0, 0).unwrap();
        let last_month = Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 59).unwrap();

        let sales = vec![
            sale("SH-0001", "Xale Vermelho", 100, 1, today),
            sale("SH-0002", "Xale Azul", 30, 2, earlier_this_month),
            sale("SH-0003", "Xale Verde", 10, 5, last_month),
        ];

        let stats = aggregate(&sales, now);

        assert_eq!(stats.total_revenue.today, Decimal::from(100));
        assert_eq!(stats.total_revenue.month, Decimal::from(160));
        assert_eq!(stats.total_revenue.all_time, Decimal::from(210));
        assert_eq!(stats.total_units.today, 1);
        assert_eq!(stats.total_units.month, 3);
        assert_eq!(stats.total_units.all_time, 8);
        assert_eq!(stats.distinct_products.today, 1);
        assert_eq!(stats.distinct_products.month, 2);
        assert_eq!(stats.distinct_products.all_time, 3);
    }

    #[test]
    fn midnight_boundary_is_inclusive() {
        let now = fixed_now();
        let midnight = Utc.with_ymd_and_hms(2025, 8, 15, 0, 0, 0).unwrap();
        let stats = aggregate(&[sale("SH-0001", "Xale", 10, 1, midnight)], now);
        assert_eq!(stats.total_revenue.today, Decimal::from(10));
    }

    #[test]
    fn future_dated_sale_counts_as_today() {
        // O filtro é só ">= início da janela": sem teto superior.
        let now = fixed_now();
        let tomorrow = Utc.with_ymd_and_hms(2025, 8, 16, 10, 0, 0).unwrap();
        let stats = aggregate(&[sale("SH-0001", "Xale", 25, 1, tomorrow)], now);
        assert_eq!(stats.total_revenue.today, Decimal::from(25));
        assert_eq!(stats.total_revenue.month, Decimal::from(25));
        assert_eq!(stats.total_revenue.all_time, Decimal::from(25));
    }

    #[test]
    fn windows_are_monotonic() {
        let now = fixed_now();
        let sales = vec![
            sale("SH-0001", "A", 10, 1, Utc.with_ymd_and_hms(2025, 8, 15, 1, 0, 0).unwrap()),
            sale("SH-0002", "B", 20, 2, Utc.with_ymd_and_hms(2025, 8, 10, 1, 0, 0).unwrap()),
            sale("SH-0003", "C", 30, 3, Utc.with_ymd_and_hms(2025, 6, 1, 1, 0, 0).unwrap()),
        ];
        let stats = aggregate(&sales, now);

        assert!(stats.total_revenue.all_time >= stats.total_revenue.month);
        assert!(stats.total_revenue.month >= stats.total_revenue.today);
        assert!(stats.total_units.all_time >= stats.total_units.month);
        assert!(stats.total_units.month >= stats.total_units.today);
        assert!(stats.distinct_products.all_time >= stats.distinct_products.month);
        assert!(stats.distinct_products.month >= stats.distinct_products.today);
    }

    #[test]
    fn input_order_does_not_change_totals() {
        let now = fixed_now();
        let mut sales = vec![
            sale("SH-0001", "A", 10, 1, Utc.with_ymd_and_hms(2025, 8, 15, 1, 0, 0).unwrap()),
            sale("SH-0002", "B", 20, 2, Utc.with_ymd_and_hms(2025, 8, 10, 1, 0, 0).unwrap()),
            sale("SH-0003", "C", 30, 3, Utc.with_ymd_and_hms(2025, 6, 1, 1, 0, 0).unwrap()),
        ];

        let forward = aggregate(&sales, now);
        sales.reverse();
        let backward = aggregate(&sales, now);

        assert_eq!(forward.total_revenue.all_time, backward.total_revenue.all_time);
        assert_eq!(forward.total_units.month, backward.total_units.month);
        assert_eq!(forward.distinct_products.today, backward.distinct_products.today);
        // Com o desempate por código, até o ranking é idêntico.
        let f: Vec<&str> = forward.top_sellers.iter().map(|e| e.product_code.as_str()).collect();
        let b: Vec<&str> = backward.top_sellers.iter().map(|e| e.product_code.as_str()).collect();
        assert_eq!(f, b);
    }

    #[test]
    fn top_sellers_keeps_at_most_ten() {
        let now = fixed_now();
        let ts = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
        let sales: Vec<Sale> = (0..12i64)
            .map(|i| sale(&format!("SH-{:04}", i + 1), "Xale", 10 + i, 1, ts))
            .collect();

        let stats = aggregate(&sales, now);

        assert_eq!(stats.top_sellers.len(), 10);
        // Receita decrescente ao longo do ranking.
        for pair in stats.top_sellers.windows(2) {
            assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }
        // Os dois mais baratos ficaram de fora.
        assert!(!stats.top_sellers.iter().any(|e| e.product_code == "SH-0001"));
        assert!(!stats.top_sellers.iter().any(|e| e.product_code == "SH-0002"));
    }

    #[test]
    fn revenue_ties_break_by_product_code() {
        let now = fixed_now();
        let ts = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
        let sales = vec![
            sale("SH-0009", "Z", 50, 1, ts),
            sale("SH-0001", "A", 50, 1, ts),
            sale("SH-0005", "M", 50, 1, ts),
        ];

        let stats = aggregate(&sales, now);
        let codes: Vec<&str> =
            stats.top_sellers.iter().map(|e| e.product_code.as_str()).collect();
        assert_eq!(codes, vec!["SH-0001", "SH-0005", "SH-0009"]);
    }

    #[test]
    fn dashboard_stats_wire_field_names() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
        let stats = aggregate(&[sale("SH-0001", "Xale", 10, 1, ts)], fixed_now());
        let value = serde_json::to_value(&stats).unwrap();

        assert!(value["totalRevenue"].get("allTime").is_some());
        assert!(value["totalUnits"].get("today").is_some());
        assert!(value["distinctProducts"].get("month").is_some());
        assert_eq!(value["topSellers"][0]["productCode"], "SH-0001");
        assert!(value["topSellers"][0].get("totalRevenue").is_some());
    }

    #[test]
    fn product_name_comes_from_first_record_seen() {
        let now = fixed_now();
        let first = Utc.with_ymd_and_hms(2025, 8, 14, 9, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
        // O produto foi renomeado entre as vendas; o agregado mantém o
        // nome do primeiro registro da sequência.
        let sales = vec![
            sale("SH-0001", "Xale Antigo", 10, 1, first),
            sale("SH-0001", "Xale Novo", 10, 1, second),
        ];

        let stats = aggregate(&sales, now);
        assert_eq!(stats.top_sellers.len(), 1);
        assert_eq!(stats.top_sellers[0].product_name, "Xale Antigo");
        assert_eq!(stats.top_sellers[0].total_units, 2);
        assert_eq!(stats.top_sellers[0].total_revenue, Decimal::from(20));
    }
}
