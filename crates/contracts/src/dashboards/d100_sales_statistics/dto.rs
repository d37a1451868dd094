use serde::{Deserialize, Serialize};

/// Placeholder shown for products whose order snapshot has no image.
pub const DEFAULT_CAKE_IMAGE: &str = "/default-cake.jpg";

/// Coarse sales trend, derived purely from the rank position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    /// Ranks 1-3 are `Up`, 4-6 `Stable`, everything below `Down`.
    ///
    /// The cut-offs do not depend on catalog size or on the sales gap
    /// between neighbouring ranks.
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0..=3 => Trend::Up,
            4..=6 => Trend::Stable,
            _ => Trend::Down,
        }
    }

    /// Label shown next to the trend icon on the statistics page
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Hot",
            Trend::Stable => "Normal",
            Trend::Down => "Slow",
        }
    }
}

/// One ranked row of the sales statistics table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesStat {
    /// cakeId of the aggregated product
    pub id: String,
    /// Name from the first order item seen for this product
    pub name: String,
    /// Image from the first order item seen for this product
    pub image: String,
    pub total_sold: u64,
    pub total_revenue: f64,
    /// 1-based position after sorting by `total_sold` descending
    pub rank: usize,
    pub trend: Trend,
    /// "Hot" / "Normal" / "Slow"
    pub trend_label: String,
}

/// Totals shown under the ranking table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub product_types: usize,
    pub total_quantity_sold: u64,
    pub total_revenue: f64,
}

/// Response for the sales statistics dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatisticsResponse {
    pub products: Vec<ProductSalesStat>,
    pub overview: SalesOverview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_thresholds() {
        let trends: Vec<Trend> = (1..=8).map(Trend::from_rank).collect();
        assert_eq!(
            trends,
            vec![
                Trend::Up,
                Trend::Up,
                Trend::Up,
                Trend::Stable,
                Trend::Stable,
                Trend::Stable,
                Trend::Down,
                Trend::Down,
            ]
        );
        assert_eq!(Trend::from_rank(1).label(), "Hot");
        assert_eq!(Trend::from_rank(5).label(), "Normal");
        assert_eq!(Trend::from_rank(7).label(), "Slow");
    }

    #[test]
    fn test_stat_wire_format() {
        let stat = ProductSalesStat {
            id: "A".to_string(),
            name: "Pavlova".to_string(),
            image: DEFAULT_CAKE_IMAGE.to_string(),
            total_sold: 2,
            total_revenue: 20.0,
            rank: 1,
            trend: Trend::Up,
            trend_label: Trend::Up.label().to_string(),
        };
        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json["totalSold"], 2);
        assert_eq!(json["totalRevenue"], 20.0);
        assert_eq!(json["trend"], "up");
        assert_eq!(json["trendLabel"], "Hot");
    }
}
