use crate::router::LOGIN_PATH;
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="bg-surface py-20 px-6">
            <div class="max-w-4xl mx-auto text-center space-y-6">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                    "The best place to relax and glow"
                </h1>
                <p class="text-lg text-fg-muted">
                    "Premium salon care to help you unwind, refresh and look your best."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="#book" class="rounded-full px-8 py-3 font-semibold bg-action-primary-bg text-action-primary-text">
                        "Book Appointment"
                    </a>
                    <a href="#services" class="rounded-full px-8 py-3 font-semibold border-2 border-action-primary-bg text-fg">
                        "Explore Services"
                    </a>
                </div>
                <a href=LOGIN_PATH class="block text-sm text-link hover:underline">"Staff sign in"</a>
            </div>
        </section>
    }
}
