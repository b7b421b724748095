//! Synthetic data source behind the read-only `/api` endpoints.
//!
//! [`MarketDataProvider`] hands out fixed documents. Derived figures
//! (percent changes, allocation shares, tax due) are computed from the
//! base amounts so the documents stay internally consistent. The
//! performance history values are a random walk drawn once at
//! construction; its dates are recomputed on every call.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::api::dto::{
    AllocationSlice, AssetAllocation, ComplianceCheck, ComplianceReport, ComplianceStatus,
    ExecutedTrade, Impact, Insight, InsightFeed, InsightKind, Likelihood, MarketOutlook,
    MarketPredictions, MarketSentiment, ModelMetrics, ModelPerformance, OrderSide, OrderStatus,
    PendingOrder, PerformanceHistory, PerformanceReport, PortfolioOverview, PredictionPoint,
    SectorScore, SectorSentiments, SentimentBreakdown, SentimentSplit, StressScenario,
    StressTestReport, SymbolReturn, TaxLine, TaxReport, TradingOrders, ValueAtRisk,
};
use crate::domain::market_update::round2;

/// Number of daily points in the performance history.
pub const HISTORY_DAYS: usize = 30;

const HISTORY_START_VALUE: f64 = 1_000_000.0;
const DAILY_RETURN_MEAN: f64 = 0.001;
const DAILY_RETURN_STD_DEV: f64 = 0.02;
const BENCHMARK_RATIO: f64 = 0.95;
const BENCHMARK_NOISE_STD_DEV: f64 = 1_000.0;

/// Read-only source of dashboard documents.
#[derive(Debug, Clone)]
pub struct MarketDataProvider {
    values: Vec<f64>,
    benchmark: Vec<f64>,
}

impl MarketDataProvider {
    /// Builds a provider, drawing the performance random walk from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (values, benchmark) = random_walk(rng);
        Self { values, benchmark }
    }

    /// `GET /api/portfolio/overview`.
    #[must_use]
    pub fn portfolio_overview(&self) -> PortfolioOverview {
        let cash = 150_000;
        let invested = 1_100_000;
        let total_value = cash + invested;
        let (daily, monthly, yearly) = (25_000, 125_000, 450_000);

        PortfolioOverview {
            total_value,
            daily_change: daily,
            daily_change_percent: percent_change(total_value, daily),
            monthly_change: monthly,
            monthly_change_percent: percent_change(total_value, monthly),
            yearly_change: yearly,
            yearly_change_percent: percent_change(total_value, yearly),
            cash,
            invested,
            unrealized_pnl: 45_000,
            realized_pnl: 125_000,
        }
    }

    /// `GET /api/portfolio/allocation`.
    #[must_use]
    pub fn asset_allocation(&self) -> AssetAllocation {
        let classes: [(u64, i64); 4] = [
            (600_000, 15_000),
            (300_000, 5_000),
            (200_000, 3_000),
            (150_000, 2_000),
        ];
        let total: u64 = classes.iter().map(|(value, _)| value).sum();
        let [stocks, bonds, etfs, alternatives] =
            classes.map(|(value, change)| AllocationSlice {
                value,
                percentage: share(value, total),
                change,
                change_percent: percent_change(value, change),
            });

        AssetAllocation {
            stocks,
            bonds,
            etfs,
            alternatives,
        }
    }

    /// `GET /api/portfolio/performance`: the [`HISTORY_DAYS`] days before
    /// today (local time).
    #[must_use]
    pub fn performance_history(&self) -> PerformanceHistory {
        self.performance_history_until(Local::now().date_naive())
    }

    /// Performance history dated over the [`HISTORY_DAYS`] days before
    /// `today`.
    #[must_use]
    pub fn performance_history_until(&self, today: NaiveDate) -> PerformanceHistory {
        let dates = (1..=HISTORY_DAYS)
            .rev()
            .map(|days_back| {
                (today - Duration::days(days_back as i64))
                    .format("%Y-%m-%d")
                    .to_string()
            })
            .collect();

        PerformanceHistory {
            dates,
            values: self.values.clone(),
            benchmark: self.benchmark.clone(),
        }
    }

    /// `GET /api/risk/var`.
    #[must_use]
    pub fn value_at_risk(&self) -> ValueAtRisk {
        let curve: [(u8, u64); 3] = [(90, 35_000), (95, 45_000), (99, 65_000)];

        ValueAtRisk {
            daily_var_95: 45_000,
            daily_var_99: 65_000,
            weekly_var_95: 120_000,
            weekly_var_99: 180_000,
            monthly_var_95: 250_000,
            monthly_var_99: 350_000,
            confidence_levels: curve.iter().map(|(level, _)| *level).collect(),
            var_values: curve.iter().map(|(_, var)| *var).collect(),
        }
    }

    /// `GET /api/risk/stress-test`.
    #[must_use]
    pub fn stress_test(&self) -> StressTestReport {
        let scenarios = vec![
            scenario("Market shock", -15.5, Likelihood::High),
            scenario("Rate hike", -8.2, Likelihood::Medium),
            scenario("FX swing", -5.1, Likelihood::Low),
            scenario("Liquidity crisis", -12.3, Likelihood::Medium),
            scenario("Political unrest", -6.8, Likelihood::Low),
        ];

        let mut impacts: Vec<f64> = scenarios.iter().map(|s| s.impact).collect();
        impacts.sort_by(f64::total_cmp);
        let worst_case = impacts.first().copied().unwrap_or_default();
        let expected_case = impacts.get(impacts.len() / 2).copied().unwrap_or_default();

        StressTestReport {
            scenarios,
            worst_case,
            expected_case,
            best_case: -2.1,
        }
    }

    /// `GET /api/trading/orders`.
    #[must_use]
    pub fn trading_orders(&self) -> TradingOrders {
        TradingOrders {
            pending_orders: vec![
                PendingOrder {
                    id: "ORD001".to_string(),
                    symbol: "AAPL".to_string(),
                    side: OrderSide::Buy,
                    quantity: 100,
                    price: 150.50,
                    status: OrderStatus::Pending,
                    timestamp: "2024-01-15T10:30:00Z".to_string(),
                },
                PendingOrder {
                    id: "ORD002".to_string(),
                    symbol: "TSLA".to_string(),
                    side: OrderSide::Sell,
                    quantity: 50,
                    price: 250.75,
                    status: OrderStatus::Pending,
                    timestamp: "2024-01-15T11:15:00Z".to_string(),
                },
            ],
            recent_trades: vec![ExecutedTrade {
                id: "TRD001".to_string(),
                symbol: "MSFT".to_string(),
                side: OrderSide::Buy,
                quantity: 200,
                price: 380.25,
                timestamp: "2024-01-15T09:45:00Z".to_string(),
            }],
        }
    }

    /// `GET /api/analytics/market-sentiment`.
    #[must_use]
    pub fn market_sentiment(&self) -> MarketSentiment {
        MarketSentiment {
            overall_sentiment: "positive".to_string(),
            sentiment_score: 0.75,
            sectors: SectorSentiments {
                technology: sector_score("very positive", 0.85),
                healthcare: sector_score("positive", 0.70),
                finance: sector_score("neutral", 0.50),
                energy: sector_score("negative", 0.30),
                consumer: sector_score("positive", 0.65),
            },
            trending_topics: strings(&[
                "AI breakthroughs",
                "Central bank policy",
                "Corporate earnings",
                "Geopolitical risk",
            ]),
        }
    }

    /// `GET /api/analytics/predictions`.
    #[must_use]
    pub fn market_outlook(&self) -> MarketOutlook {
        MarketOutlook {
            market_direction: "up".to_string(),
            confidence: 0.78,
            key_factors: strings(&[
                "Improving earnings",
                "Expected rate cuts",
                "Technology innovation",
            ]),
            risk_factors: strings(&[
                "Persistent inflation",
                "Geopolitical instability",
                "Tighter regulation",
            ]),
            recommendations: strings(&[
                "Increase growth allocation",
                "Keep some defensive assets",
                "Stay diversified",
            ]),
        }
    }

    /// `GET /api/analytics/market-predictions`.
    #[must_use]
    pub fn market_predictions(&self) -> MarketPredictions {
        let points: [(&str, f64, f64, u8); 3] = [
            ("2024-01", 2.1, 2.3, 85),
            ("2024-02", 2.8, 2.6, 78),
            ("2024-03", 3.2, 3.1, 82),
        ];

        MarketPredictions {
            predictions: points
                .iter()
                .map(|(date, actual, predicted, confidence)| PredictionPoint {
                    date: (*date).to_string(),
                    actual: *actual,
                    predicted: *predicted,
                    confidence: *confidence,
                })
                .collect(),
        }
    }

    /// `GET /api/analytics/sentiment`.
    #[must_use]
    pub fn sentiment_breakdown(&self) -> SentimentBreakdown {
        let rows: [(&str, u8, u8, u8); 3] = [
            ("Technology", 65, 15, 20),
            ("Healthcare", 45, 25, 30),
            ("Finance", 55, 20, 25),
        ];

        SentimentBreakdown {
            sentiment: rows
                .iter()
                .map(|(sector, positive, negative, neutral)| SentimentSplit {
                    sector: (*sector).to_string(),
                    positive: *positive,
                    negative: *negative,
                    neutral: *neutral,
                })
                .collect(),
        }
    }

    /// `GET /api/analytics/insights`.
    #[must_use]
    pub fn insights(&self) -> InsightFeed {
        InsightFeed {
            insights: vec![
                Insight {
                    id: 1,
                    kind: InsightKind::Opportunity,
                    title: "Tech momentum detected".to_string(),
                    description:
                        "Model analysis detects strong upward momentum in the technology sector.".to_string(),
                    confidence: 87,
                    impact: Impact::High,
                    timestamp: "2 hours ago".to_string(),
                },
                Insight {
                    id: 2,
                    kind: InsightKind::Risk,
                    title: "Energy sector risk rising".to_string(),
                    description:
                        "Political uncertainty is increasing risk in the energy sector.".to_string(),
                    confidence: 92,
                    impact: Impact::Medium,
                    timestamp: "4 hours ago".to_string(),
                },
            ],
        }
    }

    /// `GET /api/analytics/performance`.
    #[must_use]
    pub fn model_performance(&self) -> ModelPerformance {
        ModelPerformance {
            metrics: ModelMetrics {
                ai_accuracy: 87.3,
                sentiment_index: 72.5,
                risk_score: 23.8,
                algorithm_signals: 8,
            },
        }
    }

    /// `GET /api/reports/performance`.
    #[must_use]
    pub fn performance_report(&self) -> PerformanceReport {
        let total_return = 11.25;
        let benchmark_return = 8.50;

        PerformanceReport {
            period: "January 2024".to_string(),
            total_return,
            benchmark_return,
            alpha: round2(total_return - benchmark_return),
            beta: 0.95,
            sharpe_ratio: 1.45,
            max_drawdown: -8.20,
            volatility: 12.50,
            top_performers: symbol_returns(&[("NVDA", 25.5), ("AAPL", 18.2), ("MSFT", 15.8)]),
            bottom_performers: symbol_returns(&[("TSLA", -5.2), ("META", -2.1), ("NFLX", 1.5)]),
        }
    }

    /// `GET /api/reports/compliance`.
    #[must_use]
    pub fn compliance_report(&self) -> ComplianceReport {
        let checks: [(&str, ComplianceStatus, u8, &str); 3] = [
            ("Internal controls", ComplianceStatus::Compliant, 95, "2024-01-15"),
            ("Risk management", ComplianceStatus::Compliant, 88, "2024-01-10"),
            ("Information security", ComplianceStatus::Warning, 72, "2024-01-12"),
        ];

        ComplianceReport {
            compliance: checks
                .iter()
                .map(|(category, status, score, last_check)| ComplianceCheck {
                    category: (*category).to_string(),
                    status: *status,
                    score: *score,
                    last_check: (*last_check).to_string(),
                })
                .collect(),
        }
    }

    /// `GET /api/reports/tax`.
    #[must_use]
    pub fn tax_report(&self) -> TaxReport {
        let incomes: [(&str, u64, u8); 3] = [
            ("Dividend income", 1_250_000, 15),
            ("Capital gains", 850_000, 20),
            ("Interest income", 320_000, 10),
        ];

        TaxReport {
            tax_data: incomes
                .iter()
                .map(|(category, amount, rate)| TaxLine {
                    category: (*category).to_string(),
                    amount: *amount,
                    tax: amount * u64::from(*rate) / 100,
                    rate: *rate,
                })
                .collect(),
        }
    }
}

/// Relative change in percent given the current value and the absolute
/// change that led to it.
fn percent_change(current: u64, change: i64) -> f64 {
    let previous = current as f64 - change as f64;
    if previous == 0.0 {
        return 0.0;
    }
    round2(change as f64 / previous * 100.0)
}

/// Share of `part` in `total`, in percent.
fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Daily closes of the portfolio and its benchmark.
fn random_walk<R: Rng + ?Sized>(rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let mut values = Vec::with_capacity(HISTORY_DAYS);
    let mut benchmark = Vec::with_capacity(HISTORY_DAYS);
    // Both parameter sets are finite with a positive deviation.
    if let (Ok(returns), Ok(noise)) = (
        Normal::new(DAILY_RETURN_MEAN, DAILY_RETURN_STD_DEV),
        Normal::new(0.0, BENCHMARK_NOISE_STD_DEV),
    ) {
        let mut value = HISTORY_START_VALUE;
        for _ in 0..HISTORY_DAYS {
            value *= 1.0 + returns.sample(rng);
            let close = round2(value);
            values.push(close);
            benchmark.push(round2(close * BENCHMARK_RATIO + noise.sample(rng)));
        }
    }

    (values, benchmark)
}

fn scenario(name: &str, impact: f64, probability: Likelihood) -> StressScenario {
    StressScenario {
        name: name.to_string(),
        impact,
        probability,
    }
}

fn sector_score(sentiment: &str, score: f64) -> SectorScore {
    SectorScore {
        sentiment: sentiment.to_string(),
        score,
    }
}

fn symbol_returns(rows: &[(&str, f64)]) -> Vec<SymbolReturn> {
    rows.iter()
        .map(|(symbol, return_pct)| SymbolReturn {
            symbol: (*symbol).to_string(),
            return_pct: *return_pct,
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
