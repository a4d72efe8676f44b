//! Pledge Form
//!
//! Captures a pledge amount, validates it character-by-character, and
//! submits it to the ledger. Submission failures raise a blocking alert
//! and leave the input populated for retry.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Pledge promise form component
#[component]
pub fn PledgeForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (amount, set_amount) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Reject any keystroke that would break the decimal pattern: the DOM
    // value is reverted, the signal stays unchanged
    let on_amount_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let value = input.value();
        if is_amount_input(&value) {
            set_amount.set(value);
        } else {
            input.set_value(&amount.get_untracked());
        }
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(value) = parsed_amount(&amount.get()) else {
            return;
        };

        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::submit_pledge(value).await {
                Ok(fund) => {
                    state.apply_fund_state(fund);
                    state.celebrate();
                    state.open_modal("Merci");
                    set_amount.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to submit pledge: {}", e).into(),
                    );
                    // Blocking notification; the input keeps its value for retry
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Une erreur de connexion est survenue. Veuillez réessayer.",
                        );
                    }
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="space-y-3">
                <label
                    for="amount"
                    class="block text-center text-sm font-medium text-slate-600 uppercase tracking-wide"
                >
                    "Ma promesse de contribution"
                </label>
                <div class="relative max-w-xs mx-auto">
                    <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-400 text-xl font-serif italic">
                        "€"
                    </span>
                    <input
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="Montant libre"
                        prop:value=move || amount.get()
                        on:input=on_amount_input
                        class="w-full pl-10 pr-4 py-4 text-center text-3xl font-serif font-bold text-navy-900
                               bg-slate-50 border border-slate-200 rounded-xl focus:ring-2 focus:ring-gold-400
                               focus:border-gold-400 transition-all outline-none"
                        required=true
                    />
                </div>
                <p class="flex justify-center items-center text-xs text-slate-400 pt-1">
                    "Anonyme • Confidentiel • Sacré"
                </p>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get() || parsed_amount(&amount.get()).is_none()
                class="w-full flex items-center justify-center py-4 px-6 text-lg font-medium rounded-xl
                       text-white bg-navy-900 hover:bg-navy-800 transition-all disabled:opacity-70
                       disabled:cursor-not-allowed shadow-md hover:shadow-xl"
            >
                {move || if submitting.get() {
                    view! {
                        <span class="flex items-center">
                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin mr-2" />
                            "Validation..."
                        </span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Je valide ma promesse →"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

/// Accepts exactly the non-negative decimal literals under construction:
/// optional digits, at most one dot, optional fractional digits.
pub fn is_amount_input(s: &str) -> bool {
    let mut seen_dot = false;
    s.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Parse a submittable amount: finite and strictly positive, else `None`.
pub fn parsed_amount(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|a| a.is_finite() && *a > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_input_accepts_decimals_under_construction() {
        for s in ["", "2", "25", "25.", "25.5", ".", ".5", "0.05"] {
            assert!(is_amount_input(s), "should accept {:?}", s);
        }
    }

    #[test]
    fn test_amount_input_rejects_everything_else() {
        for s in ["25,5", "-5", "+5", "25.5.5", "1e3", "abc", "12a", " 25"] {
            assert!(!is_amount_input(s), "should reject {:?}", s);
        }
    }

    #[test]
    fn test_amount_input_accepts_any_valid_keystroke_order() {
        // Every prefix of a valid literal is itself valid
        let target = "125.50";
        for i in 0..=target.len() {
            assert!(is_amount_input(&target[..i]));
        }
    }

    #[test]
    fn test_parsed_amount_requires_positive() {
        assert_eq!(parsed_amount("25.5"), Some(25.5));
        assert_eq!(parsed_amount("25."), Some(25.0));
        assert_eq!(parsed_amount(".5"), Some(0.5));
        assert_eq!(parsed_amount("0"), None);
        assert_eq!(parsed_amount(""), None);
        assert_eq!(parsed_amount("."), None);
    }
}
