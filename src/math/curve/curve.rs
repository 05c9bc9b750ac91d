use chrono::NaiveDate;

/// decay 曲線：給定經過時間 `t` 回傳 decay score。
///
/// 曲線建構後不可變，`Send + Sync` 使其可透過 `&` 或 `Arc` 跨執行緒共享。
pub trait DecayCurve: Send + Sync {
    fn evaluate(&self, t: f64) -> f64;

    /// 以 `event` 到 `as_of` 經過的日數求值
    fn evaluate_between(&self, event: NaiveDate, as_of: NaiveDate) -> f64 {
        let days = (as_of - event).num_days() as f64;
        self.evaluate(days)
    }
}
