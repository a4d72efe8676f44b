//! Confirmation Overlay
//!
//! Modal shown after a successful pledge. Visible iff the global
//! `modal_open` flag is set; both the close control and the return button
//! clear it.

use leptos::*;

use crate::state::global::GlobalState;

/// Pledge confirmation modal
#[component]
pub fn PledgeModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if !state.modal_open.get() {
                return view! {}.into_view();
            }

            let close_state = state.clone();
            let return_state = state.clone();

            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-navy-900/60 backdrop-blur-sm">
                    <div class="bg-white rounded-2xl shadow-2xl max-w-md w-full p-8 relative border-t-4 border-gold-500">
                        <button
                            on:click=move |_| close_state.close_modal()
                            class="absolute top-4 right-4 text-slate-400 hover:text-slate-600 transition-colors"
                        >
                            "✕"
                        </button>

                        <div class="flex flex-col items-center text-center space-y-6">
                            <div class="w-16 h-16 bg-gold-50 rounded-full flex items-center justify-center text-gold-600 text-3xl">
                                "♥"
                            </div>

                            <h3 class="text-2xl font-serif font-bold text-navy-900">
                                "Promesse Enregistrée"
                            </h3>

                            <p class="text-lg text-slate-600 leading-relaxed italic">
                                "\"" {state.modal_message.get()} "\""
                            </p>

                            <button
                                on:click=move |_| return_state.close_modal()
                                class="w-full py-3 px-6 bg-navy-900 text-white rounded-xl font-medium
                                       hover:bg-navy-800 transition-colors shadow-lg"
                            >
                                "Retour à l'accueil"
                            </button>
                        </div>
                    </div>
                </div>
            }.into_view()
        }}
    }
}
