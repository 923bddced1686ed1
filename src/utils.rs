use chrono::Utc;
use rand::{rngs::OsRng, Rng, TryRngCore};

/// Uniform over the inclusive `[min, max]`, drawn from OS entropy so the
/// daily winner can't be predicted. Panics if the entropy source fails.
pub fn random_int(min: i64, max: i64) -> i64 {
  OsRng.unwrap_err().random_range(min..=max)
}

pub fn now_unix() -> i64 {
  Utc::now().timestamp()
}

pub fn format_user_name(username: Option<&str>, first_name: &str, last_name: Option<&str>) -> String {
  match username {
    Some(username) if !username.is_empty() => format!("@{}", username),
    _ => match last_name {
      Some(last) if !last.is_empty() => format!("{} {}", first_name, last),
      _ => first_name.to_string(),
    },
  }
}
