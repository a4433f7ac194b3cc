#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    No,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::No => "no",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "no" => Some(Language::No),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::No,
            Language::No => Language::En,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::No => "🇳🇴",
        }
    }

    /// Looks up `key`, falling back to the key itself.
    pub fn translate<'a>(self, key: &'a str) -> &'a str {
        let table = match self {
            Language::En => EN,
            Language::No => NO,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

const EN: &[(&str, &str)] = &[
    ("app-title", "🔢 Multiplication Practice"),
    ("select-tables", "Select Times Tables to Practice"),
    ("table-1", "1x Table"),
    ("table-2", "2x Table"),
    ("table-3", "3x Table"),
    ("table-4", "4x Table"),
    ("table-5", "5x Table"),
    ("table-6", "6x Table"),
    ("table-7", "7x Table"),
    ("table-8", "8x Table"),
    ("table-9", "9x Table"),
    ("table-10", "10x Table"),
    ("best-results", "🏆 Best Results by Times Table"),
    ("start-practice", "Start Practice"),
    ("master-quiz", "Master Quiz (All Tables)"),
    ("current-table", "Table:"),
    ("question-counter", "Question"),
    ("question-of", "of"),
    ("timer", "Time:"),
    ("score", "Score:"),
    ("submit", "Submit"),
    ("skip", "Skip"),
    ("quit-game", "Quit Game"),
    ("quiz-complete", "Quiz Complete!"),
    ("time-taken", "Time Taken"),
    ("correct-answers", "Correct Answers"),
    ("wrong-answers", "Wrong Answers"),
    ("accuracy", "Accuracy"),
    ("view-progress", "View Progress"),
    ("play-again", "Play Again"),
    ("back-to-menu", "Back to Menu"),
    ("your-progress", "Your Progress"),
    ("accuracy-over-time", "Accuracy Over Time"),
    ("time-per-quiz", "Time Per Quiz"),
    ("performance-by-table", "Performance by Table"),
    ("total-quizzes", "Total Quizzes"),
    ("average-accuracy", "Average Accuracy"),
    ("best-time", "Best Time"),
    ("best-time-stat", "Best Time:"),
    ("best-accuracy-stat", "Best Accuracy:"),
    ("avg-accuracy-stat", "Avg Accuracy:"),
    ("perfect-scores-stat", "Perfect Scores:"),
    ("total-quizzes-stat", "Total Quizzes:"),
    ("no-data", "No data"),
    ("correct-feedback", "Correct! ✓"),
    ("wrong-feedback", "Wrong! The correct answer is"),
    ("skipped-feedback", "Skipped! The answer was"),
    ("enter-number", "Please enter a number!"),
    ("select-table-alert", "Please select a times table!"),
    (
        "no-quiz-data",
        "No quiz data yet. Complete some quizzes to see your best results!",
    ),
    ("get-ready", "Get Ready!"),
    ("starting-in", "Starting in..."),
    ("go", "GO!"),
    ("table", "Table"),
];

const NO: &[(&str, &str)] = &[
    ("app-title", "🔢 Gangetabell-øving"),
    ("select-tables", "Velg gangetabeller å øve på"),
    ("table-1", "1-gangen"),
    ("table-2", "2-gangen"),
    ("table-3", "3-gangen"),
    ("table-4", "4-gangen"),
    ("table-5", "5-gangen"),
    ("table-6", "6-gangen"),
    ("table-7", "7-gangen"),
    ("table-8", "8-gangen"),
    ("table-9", "9-gangen"),
    ("table-10", "10-gangen"),
    ("best-results", "🏆 Beste resultater per gangetabell"),
    ("start-practice", "Start øving"),
    ("master-quiz", "Mesterquiz (alle tabeller)"),
    ("current-table", "Tabell:"),
    ("question-counter", "Spørsmål"),
    ("question-of", "av"),
    ("timer", "Tid:"),
    ("score", "Poeng:"),
    ("submit", "Send inn"),
    ("skip", "Hopp over"),
    ("quit-game", "Avslutt spill"),
    ("quiz-complete", "Quiz fullført!"),
    ("time-taken", "Tid brukt"),
    ("correct-answers", "Riktige svar"),
    ("wrong-answers", "Feil svar"),
    ("accuracy", "Nøyaktighet"),
    ("view-progress", "Se fremgang"),
    ("play-again", "Spill igjen"),
    ("back-to-menu", "Tilbake til meny"),
    ("your-progress", "Din fremgang"),
    ("accuracy-over-time", "Nøyaktighet over tid"),
    ("time-per-quiz", "Tid per quiz"),
    ("performance-by-table", "Prestasjon per tabell"),
    ("total-quizzes", "Totale quizer"),
    ("average-accuracy", "Gjennomsnittlig nøyaktighet"),
    ("best-time", "Beste tid"),
    ("best-time-stat", "Beste tid:"),
    ("best-accuracy-stat", "Beste nøyaktighet:"),
    ("avg-accuracy-stat", "Gj.snitt nøyaktighet:"),
    ("perfect-scores-stat", "Perfekte resultater:"),
    ("total-quizzes-stat", "Totale quizer:"),
    ("no-data", "Ingen data"),
    ("correct-feedback", "Riktig! ✓"),
    ("wrong-feedback", "Feil! Det riktige svaret er"),
    ("skipped-feedback", "Hoppet over! Svaret var"),
    ("enter-number", "Vennligst skriv inn et tall!"),
    ("select-table-alert", "Vennligst velg en gangetabell!"),
    (
        "no-quiz-data",
        "Ingen quiz-data ennå. Fullfør noen quizer for å se dine beste resultater!",
    ),
    ("get-ready", "Gjør deg klar!"),
    ("starting-in", "Starter om..."),
    ("go", "KJØR!"),
    ("table", "gangen"),
];
