//! App Root Component
//!
//! Single-page layout: event header, quote card, animated total, pledge
//! form, status footer, plus the confirmation overlay and confetti canvas.

use leptos::*;

use crate::components::{ConfettiCanvas, Counter, PledgeForm, PledgeModal};
use crate::state::{provide_global_state, start_polling, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Start the 5-second refresh loop; cancelled when this owner is dropped
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    start_polling(state.clone());

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-50 via-white to-amber-50/50 font-sans">
            <Header />

            <main class="flex-grow flex flex-col items-center justify-center px-4 py-6 w-full max-w-lg mx-auto space-y-8">
                <QuoteCard />

                // Total display
                <div class="w-full bg-white rounded-3xl shadow-2xl shadow-slate-200/60 p-8 md:p-10 text-center border border-slate-50 relative overflow-hidden">
                    <div class="absolute top-0 left-0 w-full h-1.5 bg-gradient-to-r from-gold-400 via-gold-500 to-gold-600" />
                    <h2 class="text-xs font-bold text-slate-400 uppercase tracking-widest mb-3">
                        "Contributions Validées"
                    </h2>
                    <div class="text-5xl md:text-6xl font-serif font-bold text-navy-900 mb-2 tracking-tight">
                        <Counter value=state.total />
                    </div>
                </div>

                // Pledge form
                <div class="w-full bg-white/80 backdrop-blur-sm rounded-2xl border border-slate-200/60 p-6 md:p-8 shadow-sm">
                    <PledgeForm />
                </div>
            </main>

            <Footer />

            <PledgeModal />
            <ConfettiCanvas />
        </div>
    }
}

/// Event header with title and dates
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="pt-12 pb-6 px-6 text-center space-y-2">
            <div class="w-16 h-0.5 bg-gold-400 mx-auto mb-6 opacity-50" />

            <h1 class="text-4xl md:text-5xl font-serif font-bold text-navy-900 tracking-tight pt-2">
                "Week-end du fonds national"
            </h1>
            <p class="text-xl md:text-2xl font-serif text-slate-600 mt-1 italic">
                "Bahá’ís de Lille"
            </p>

            <div class="inline-flex items-center justify-center space-x-2 mt-4 text-gold-700 bg-gold-50 px-4 py-1.5 rounded-full border border-gold-100">
                <span class="text-sm font-medium tracking-wide">"5, 6 et 7 Décembre 2025"</span>
            </div>
        </header>
    }
}

/// Shoghi Effendi quote card
#[component]
fn QuoteCard() -> impl IntoView {
    view! {
        <div class="text-center px-4 md:px-8">
            <p class="font-serif text-lg md:text-xl text-slate-600 italic leading-relaxed">
                "« Nous devons être comme la fontaine ou la source qui se vide continuellement \
                 jusqu’à se tarir et qui est continuellement alimentée par un flux invisible. »"
            </p>
            <p class="mt-3 text-sm font-semibold text-slate-500 uppercase tracking-wide">
                "— Shoghi Effendi"
            </p>
        </div>
    }
}

/// Footer showing the pledge count and last refresh time
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="py-4 px-6 text-center text-xs text-slate-400 space-x-3">
            <span>
                {move || {
                    let count = state.pledge_count.get();
                    if count == 1 {
                        "1 promesse".to_string()
                    } else {
                        format!("{} promesses", count)
                    }
                }}
            </span>
            <span>"•"</span>
            <span>
                {move || {
                    state.last_refresh.get()
                        .and_then(chrono::DateTime::from_timestamp_millis)
                        .map(|dt| format!("Actualisé à {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "En attente du serveur...".to_string())
                }}
            </span>
        </footer>
    }
}
