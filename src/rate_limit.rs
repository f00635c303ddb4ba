use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Duration};

use crate::error::AppError;

/// Global budget for tokenless `/api/user/me` calls, each of which creates an account.
pub type GuestLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Allow `attempts` guest bootstraps per `window_seconds`, refilled evenly across the window.
pub fn create_guest_limiter(attempts: u32, window_seconds: u64) -> GuestLimiter {
    let burst = NonZeroU32::new(attempts).unwrap_or(NonZeroU32::MIN);
    let period = Duration::from_millis((window_seconds * 1000 / u64::from(burst.get())).max(1));
    let quota = Quota::with_period(period)
        .unwrap_or_else(|| Quota::per_second(burst))
        .allow_burst(burst);

    Arc::new(RateLimiter::direct(quota))
}

pub fn check_guest_budget(limiter: &GuestLimiter) -> Result<(), AppError> {
    limiter.check().map_err(|_| {
        tracing::warn!("Guest bootstrap budget exhausted");
        AppError::TooManyRequests("Too many new guest sessions, try again later".to_string())
    })
}
