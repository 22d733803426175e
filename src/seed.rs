//! Seed Values
//!
//! The fixed list a fresh ranking starts from.

pub const SEED_VALUES: &[&str] = &[
    "Miłość", "Balans", "Energia", "Akceptacja", "Harmonia", "Satysfakcja",
    "Zaufanie", "Intuicja", "Radość", "Religia", "Motywacja", "Szczęście",
    "Zdrowie", "Pasja", "Bogactwo", "Piękno", "Niezależność", "Dostatek",
    "Intymność", "Elastyczność", "Sukces", "Spokój", "Wolność", "Perfekcjonizm",
    "Szczerość", "Zaangażowanie", "Mądrość", "Stabilność Finansowa", "Wdzięczność",
    "Wygoda", "Rozwój osobisty", "Wsparcie", "Dobra zabawa", "Wykształcenie",
    "Wrażliwość", "Humor", "Kreatywność", "Wyobraźnia", "Marzenia", "Bezpieczeństwo",
    "Komfort", "Pewność", "Sprawiedliwość", "Lojalność",
    "Duma", "Przygoda", "Ryzyko", "Wyzwania", "Autentyczność", "Odwaga",
    "Oryginalność", "Szacunek", "Otwartość", "Pokój",
    "Wiedza", "Duchowość", "Uczciwość", "Prawda", "Inicjatywa",
    "Innowacyjność", "Przyjaźń", "Współpraca",
    "Skuteczność", "Spełnienie", "Odpowiedzialność",
    "Rodzina", "Władza", "Praca", "Tolerancja", "Tradycja",
];
