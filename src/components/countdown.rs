use chrono::{DateTime, Duration, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// The promo deadline sits this far past page load.
const PROMO_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_seconds((deadline - now).num_seconds())
    }
}

fn pad(value: i64) -> String {
    format!("{value:02}")
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let parts = use_state(|| CountdownParts::from_seconds(PROMO_WINDOW_DAYS * 86_400));

    {
        let parts = parts.clone();
        use_effect_with_deps(
            move |_| {
                let deadline = Utc::now() + Duration::days(PROMO_WINDOW_DAYS);
                parts.set(CountdownParts::until(deadline, Utc::now()));
                let interval = Interval::new(1_000, move || {
                    parts.set(CountdownParts::until(deadline, Utc::now()));
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="countdown">
            <p class="countdown-label">{"Harga promo berakhir dalam:"}</p>
            <div class="countdown-units">
                <div class="countdown-unit">
                    <span class="countdown-value">{pad(parts.days)}</span>
                    <span class="countdown-caption">{"Hari"}</span>
                </div>
                <div class="countdown-unit">
                    <span class="countdown-value">{pad(parts.hours)}</span>
                    <span class="countdown-caption">{"Jam"}</span>
                </div>
                <div class="countdown-unit">
                    <span class="countdown-value">{pad(parts.minutes)}</span>
                    <span class="countdown-caption">{"Menit"}</span>
                </div>
                <div class="countdown-unit">
                    <span class="countdown-value">{pad(parts.seconds)}</span>
                    <span class="countdown-caption">{"Detik"}</span>
                </div>
            </div>

            <style>
                {r#"
                .countdown {
                    margin: 2rem 0;
                    text-align: center;
                }

                .countdown-label {
                    color: #ffd166;
                    font-size: 0.95rem;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    margin-bottom: 0.75rem;
                }

                .countdown-units {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }

                .countdown-unit {
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 10px;
                    min-width: 64px;
                    padding: 0.75rem 0.5rem;
                    display: flex;
                    flex-direction: column;
                }

                .countdown-value {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #fff;
                    font-variant-numeric: tabular-nums;
                }

                .countdown-caption {
                    font-size: 0.75rem;
                    color: #bbb;
                    margin-top: 0.25rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_full_window() {
        let parts = CountdownParts::from_seconds(3 * 86_400);
        assert_eq!(parts, CountdownParts { days: 3, hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn splits_mixed_remainders() {
        let parts = CountdownParts::from_seconds(86_400 + 3_600 + 61);
        assert_eq!(parts, CountdownParts { days: 1, hours: 1, minutes: 1, seconds: 1 });
    }

    #[test]
    fn an_expired_deadline_clamps_to_zero() {
        let parts = CountdownParts::from_seconds(-5);
        assert_eq!(parts, CountdownParts { days: 0, hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn pads_single_digits() {
        assert_eq!(pad(7), "07");
        assert_eq!(pad(59), "59");
    }
}
