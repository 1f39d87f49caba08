use crate::models::badge::{Badge, BadgeStatus, Requirement};
use crate::models::progress::DashboardMetrics;

pub struct BadgeLogic;

impl BadgeLogic {
    /// Evaluate badge definitions against the current metrics.
    /// Progress is capped at 100 even when the target is exceeded.
    pub fn evaluate(badges: Vec<Badge>, metrics: &DashboardMetrics) -> Vec<BadgeStatus> {
        badges
            .into_iter()
            .map(|badge| {
                let current_value = match badge.requirement_type {
                    Requirement::TotalPages => metrics.total_pages,
                    Requirement::ReadStreak => metrics.streak_days as i64,
                    Requirement::TotalBooks => metrics.read_books_count,
                };

                let target = badge.requirement_value;
                let progress_percent = if target > 0 {
                    (((current_value as f64 / target as f64) * 100.0).round() as i64).min(100)
                } else {
                    0
                };
                let earned = current_value >= target;

                BadgeStatus {
                    badge,
                    current_value,
                    progress_percent,
                    earned,
                }
            })
            .collect()
    }
}
