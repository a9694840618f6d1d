//! Marketing landing page, the main entry point for new visitors.

use leptos::prelude::*;

use crate::ui::components::{
    BarChartIcon, ButtonSize, ButtonVariant, Card, CardDescription, CardHeader, CardTitle,
    FileTextIcon, GlobeIcon, LinkButton, ShieldIcon, UsersIcon, ZapIcon,
};
use crate::ui::metadata::PageMetadata;

/// Title and description of `/`.
pub const LANDING_METADATA: PageMetadata = PageMetadata {
    title: Some("Scriptony - Professionelles Drehbuch & Worldbuilding"),
    description: Some(
        "Die ultimative Lösung für Drehbuchautoren und Worldbuilding-Enthusiasten. \
         Erstelle, organisiere und teile deine kreativen Projekte.",
    ),
    path: Some("/"),
    noindex: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    FileText,
    Globe,
    Zap,
    Users,
    Shield,
    BarChart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::FileText,
        title: "Skript-Projekte",
        description: "Organisiere deine Drehbücher mit Szenen, Charakteren und detaillierten \
                      Produktionsnotizen.",
    },
    Feature {
        icon: FeatureIcon::Globe,
        title: "Worldbuilding",
        description: "Erschaffe komplexe Welten mit Geographie, Politik, Kultur und \
                      durchdachten Gesellschaftsstrukturen.",
    },
    Feature {
        icon: FeatureIcon::Zap,
        title: "Creative Gym",
        description: "Trainiere deine Kreativität mit täglich neuen Challenges und \
                      gamifizierten Übungen.",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "Teamarbeit",
        description: "Arbeite nahtlos mit deinem Team zusammen und verwalte Berechtigungen \
                      professionell.",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Datenschutz",
        description: "Deine kreativen Werke sind sicher geschützt mit modernster \
                      Verschlüsselung und DSGVO-Konformität.",
    },
    Feature {
        icon: FeatureIcon::BarChart,
        title: "Analytics",
        description: "Verfolge deinen Fortschritt und erkenne Patterns in deinem \
                      kreativen Workflow.",
    },
];

const QUOTE: &str = "Kunst ist eine Lüge, die uns die Wahrheit erkennen lässt.";
const QUOTE_AUTHOR: &str = "Pablo Picasso";

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <HeroSection />
            <FeaturesSection />
            <CallToActionSection />
            <QuoteSection />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="relative py-20 lg:py-32 overflow-hidden">
            <div class="container mx-auto px-4 text-center">
                <div class="max-w-4xl mx-auto space-y-8">
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold tracking-tight">
                        "Professionelles "
                        <span class="text-primary">"Drehbuch"</span>
                        " & "
                        <span class="text-primary">"Worldbuilding"</span>
                    </h1>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Die ultimative Lösung für Drehbuchautoren und Worldbuilding-Enthusiasten. \
                         Erstelle, organisiere und teile deine kreativen Projekte mit modernsten Tools."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <LinkButton href="/auth/signup" size=ButtonSize::Lg class="text-lg">
                            "Kostenlos starten"
                        </LinkButton>
                        <LinkButton href="/demo" variant=ButtonVariant::Outline size=ButtonSize::Lg class="text-lg">
                            "Live Demo"
                        </LinkButton>
                    </div>
                </div>
            </div>

            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <div class="absolute -top-1/2 -right-1/2 w-96 h-96 bg-primary/10 rounded-full blur-3xl"></div>
                <div class="absolute -bottom-1/2 -left-1/2 w-96 h-96 bg-accent/10 rounded-full blur-3xl"></div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|feature| view! { <FeatureCard feature=*feature /> })
        .collect_view();

    view! {
        <section id="features" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "Alles was du brauchst, an einem Ort"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Von der ersten Idee bis zum fertigen Drehbuch - Scriptony begleitet dich \
                         durch den gesamten kreativen Prozess."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {cards}
                </div>
            </div>
        </section>
    }
}

/// Feature card for the features grid.
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    const ICON_CLASS: &str = "h-10 w-10 text-primary mb-2";

    let icon = match feature.icon {
        FeatureIcon::FileText => view! { <FileTextIcon class=ICON_CLASS /> }.into_any(),
        FeatureIcon::Globe => view! { <GlobeIcon class=ICON_CLASS /> }.into_any(),
        FeatureIcon::Zap => view! { <ZapIcon class=ICON_CLASS /> }.into_any(),
        FeatureIcon::Users => view! { <UsersIcon class=ICON_CLASS /> }.into_any(),
        FeatureIcon::Shield => view! { <ShieldIcon class=ICON_CLASS /> }.into_any(),
        FeatureIcon::BarChart => view! { <BarChartIcon class=ICON_CLASS /> }.into_any(),
    };

    view! {
        <Card>
            <CardHeader>
                {icon}
                <CardTitle>{feature.title}</CardTitle>
                <CardDescription>{feature.description}</CardDescription>
            </CardHeader>
        </Card>
    }
}

#[component]
fn CallToActionSection() -> impl IntoView {
    view! {
        <section id="cta" class="py-20">
            <div class="container mx-auto px-4 text-center">
                <div class="max-w-2xl mx-auto space-y-8">
                    <h2 class="text-3xl sm:text-4xl font-bold">
                        "Bereit, deine kreative Reise zu beginnen?"
                    </h2>
                    <p class="text-xl text-muted-foreground">
                        "Schließe dich tausenden von Autoren an, die bereits mit Scriptony \
                         ihre Geschichten zum Leben erwecken."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <LinkButton href="/auth/signup" size=ButtonSize::Lg class="text-lg">
                            "Kostenlos registrieren"
                        </LinkButton>
                        <LinkButton href="/contact" variant=ButtonVariant::Outline size=ButtonSize::Lg class="text-lg">
                            "Kontakt aufnehmen"
                        </LinkButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuoteSection() -> impl IntoView {
    view! {
        <section id="quote" class="py-16 bg-muted/30">
            <div class="container mx-auto px-4 text-center">
                <div class="max-w-3xl mx-auto">
                    <blockquote class="text-2xl font-medium italic text-muted-foreground">
                        {format!("\u{201c}{QUOTE}\u{201d}")}
                    </blockquote>
                    <cite class="block mt-4 text-sm text-muted-foreground/70">
                        {format!("- {QUOTE_AUTHOR}")}
                    </cite>
                </div>
            </div>
        </section>
    }
}
