use crate::feedback::FeedbackLine;
use crate::{charts, storage};
use chrono::Utc;
use eframe::egui;
use tt_core::session::{CountdownValue, PhaseKind};
use tt_core::stats::{format_best_time, format_clock, TableStats};
use tt_core::{
    Feedback, Language, ProgressStore, QuizError, QuizEvent, SelectionDraft, Session,
    SessionRecord, Statistics, Table, TableSelection,
};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(250, 189, 47);
const SUCCESS: egui::Color32 = egui::Color32::from_rgb(184, 187, 38);
const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 20, 60);
const WARNING: egui::Color32 = egui::Color32::from_rgb(254, 128, 25);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Countdown,
    Game,
    Results,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Accuracy,
    Time,
    TablePerformance,
}

pub struct QuizApp {
    store: ProgressStore,
    stats: Statistics,
    language: Language,
    draft: SelectionDraft,
    session: Session,
    screen: Screen,
    chart: ChartKind,
    countdown: Option<CountdownValue>,
    question_text: String,
    counter: (usize, usize),
    score: (u32, u32),
    elapsed: u64,
    answer_input: String,
    feedback: FeedbackLine,
    result: Option<SessionRecord>,
    message: Option<String>,
}

impl QuizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = storage::open_store();
        let stats = Statistics::compute(store.records());
        let language = store.load_language();

        Self {
            store,
            stats,
            language,
            draft: SelectionDraft::default(),
            session: Session::new(),
            screen: Screen::Menu,
            chart: ChartKind::Accuracy,
            countdown: None,
            question_text: String::new(),
            counter: (0, 0),
            score: (0, 0),
            elapsed: 0,
            answer_input: String::new(),
            feedback: FeedbackLine::default(),
            result: None,
            message: None,
        }
    }

    fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.translate(key)
    }

    fn start(&mut self, selection: TableSelection) {
        let result = self.session.start(selection, Utc::now(), &mut rand::thread_rng());
        self.handle(result);
    }

    fn start_custom(&mut self) {
        match self.draft.custom() {
            Ok(selection) => self.start(selection),
            Err(QuizError::NoSelection) => {
                self.message = Some(self.t("select-table-alert").to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn play_again(&mut self) {
        let result = self.session.play_again(Utc::now(), &mut rand::thread_rng());
        self.handle(result);
    }

    fn submit(&mut self) {
        let result = self.session.submit(&self.answer_input, Utc::now());
        self.handle(result);
    }

    fn skip(&mut self) {
        let result = self.session.skip(Utc::now());
        self.handle(result);
    }

    fn quit(&mut self) {
        let result = self.session.quit();
        self.handle(result);
        self.screen = Screen::Menu;
    }

    fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        if let Err(e) = self.store.save_language(self.language) {
            log::warn!("Failed to save language: {e}");
        }
    }

    fn handle(&mut self, result: Result<Vec<QuizEvent>, QuizError>) {
        match result {
            Ok(events) => self.apply(events),
            Err(e) => {
                log::warn!("{e}");
                self.message = Some(e.to_string());
            }
        }
    }

    fn apply(&mut self, events: Vec<QuizEvent>) {
        for event in events {
            match event {
                QuizEvent::CountdownStarted { .. } => {
                    self.message = None;
                    self.feedback.reset();
                    self.result = None;
                    self.elapsed = 0;
                    self.screen = Screen::Countdown;
                }
                QuizEvent::CountdownStep(value) => self.countdown = Some(value),
                QuizEvent::QuestionShown {
                    index,
                    total,
                    question,
                } => {
                    self.screen = Screen::Game;
                    self.question_text = question.display();
                    self.counter = (index + 1, total);
                    self.answer_input.clear();
                    self.feedback.question_shown(Utc::now());
                }
                QuizEvent::ScoreChanged { correct, answered } => self.score = (correct, answered),
                QuizEvent::ElapsedTick { seconds } => self.elapsed = seconds,
                QuizEvent::Feedback(feedback) => self.feedback.show(feedback),
                QuizEvent::TimerCancelled(kind) => log::debug!("{kind:?} timer cancelled"),
                QuizEvent::Completed(record) => {
                    if let Err(e) = self.store.append(record.clone()) {
                        self.message = Some(e.to_string());
                    }
                    self.stats = Statistics::compute(self.store.records());
                    self.result = Some(record);
                    self.screen = Screen::Results;
                }
                QuizEvent::Aborted => self.countdown = None,
            }
        }
    }

    fn selection_title(&self) -> String {
        match self.session.selection() {
            Some(TableSelection::Master) | None => self.t("master-quiz").to_string(),
            Some(TableSelection::Single(table)) => format!("{}x {}", table.get(), self.t("table")),
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.t("app-title"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let code = self.language.code().to_uppercase();
                let label = format!("{} {}", self.language.flag(), code);
                if ui.button(label).clicked() {
                    self.toggle_language();
                }
            });
        });
        ui.separator();
    }

    fn menu_screen(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(self.t("select-tables")).strong());
        ui.add_space(8.0);

        egui::Grid::new("table_picker").spacing([6.0, 6.0]).show(ui, |ui| {
            for table in Table::all() {
                let selected = self.draft.selected() == Some(table);
                if ui.selectable_label(selected, self.t(&table.key())).clicked() {
                    self.draft.select(table);
                    self.message = None;
                }
                if table.get() % 5 == 0 {
                    ui.end_row();
                }
            }
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button(self.t("start-practice")).clicked() {
                self.start_custom();
            }
            if ui.button(self.t("master-quiz")).clicked() {
                self.start(TableSelection::Master);
            }
            if ui.button(self.t("view-progress")).clicked() {
                self.screen = Screen::Progress;
            }
        });

        self.message_line(ui);
        ui.add_space(12.0);
        ui.separator();
        ui.label(egui::RichText::new(self.t("best-results")).strong());

        if self.stats.global.total_sessions == 0 {
            ui.label(self.t("no-quiz-data"));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (table, stats) in &self.stats.tables {
                ui.label(egui::RichText::new(self.t(&table.key())).color(ACCENT));
                match stats {
                    TableStats::NoData => {
                        ui.label(self.t("no-data"));
                    }
                    TableStats::Summary(s) => {
                        ui.horizontal_wrapped(|ui| {
                            let best_time = format_clock(s.best_duration);
                            let best = s.best_accuracy.round();
                            let average = s.average_accuracy.round();
                            ui.label(format!("{} {}", self.t("best-time-stat"), best_time));
                            ui.label(format!("{} {}%", self.t("best-accuracy-stat"), best));
                            ui.label(format!("{} {}%", self.t("avg-accuracy-stat"), average));
                            let perfect = s.perfect_scores;
                            ui.label(format!("{} {}", self.t("perfect-scores-stat"), perfect));
                            ui.label(format!("{} {}", self.t("total-quizzes-stat"), s.total));
                        });
                    }
                }
                ui.add_space(4.0);
            }
        });
    }

    fn countdown_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(self.selection_title());
            ui.label(self.t("get-ready"));
            ui.add_space(20.0);
            let (text, color) = match self.countdown {
                Some(CountdownValue::Number(n)) => (n.to_string(), ACCENT),
                Some(CountdownValue::Go) => (self.t("go").to_string(), SUCCESS),
                None => (String::new(), ACCENT),
            };
            ui.label(egui::RichText::new(text).size(72.0).strong().color(color));
            ui.add_space(20.0);
            if ui.button(self.t("quit-game")).clicked() {
                self.quit();
            }
        });
    }

    fn game_screen(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} {}", self.t("current-table"), self.selection_title()));
            ui.separator();
            ui.label(format!("{} {}", self.t("timer"), format_clock(self.elapsed)));
            ui.separator();
            ui.label(format!("{} {}/{}", self.t("score"), self.score.0, self.score.1));
        });
        ui.label(format!(
            "{} {} {} {}",
            self.t("question-counter"),
            self.counter.0,
            self.t("question-of"),
            self.counter.1
        ));

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(&self.question_text).size(48.0).strong());
            ui.add_space(16.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.answer_input)
                    .font(egui::TextStyle::Heading)
                    .desired_width(150.0)
                    .horizontal_align(egui::Align::Center),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit();
            }
            response.request_focus();

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add_sized([110.0, 36.0], egui::Button::new(self.t("submit"))).clicked() {
                    self.submit();
                }
                if ui.add_sized([110.0, 36.0], egui::Button::new(self.t("skip"))).clicked() {
                    self.skip();
                }
                if ui.button(self.t("quit-game")).clicked() {
                    self.quit();
                }
            });

            ui.add_space(12.0);
            if let Some(feedback) = self.feedback.current() {
                let (text, color) = match feedback {
                    Feedback::Correct => (self.t("correct-feedback").to_string(), SUCCESS),
                    Feedback::Incorrect { answer, .. } => {
                        (format!("{} {}", self.t("wrong-feedback"), answer), ERROR)
                    }
                    Feedback::Skipped { answer } => {
                        (format!("{} {}", self.t("skipped-feedback"), answer), WARNING)
                    }
                    Feedback::InvalidInput => (self.t("enter-number").to_string(), ERROR),
                };
                ui.label(egui::RichText::new(text).size(20.0).color(color));
            }
        });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.quit();
        }
    }

    fn results_screen(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.result.clone() else {
            self.screen = Screen::Menu;
            return;
        };
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(self.t("quiz-complete"));
            ui.add_space(12.0);
            egui::Grid::new("results").spacing([24.0, 8.0]).show(ui, |ui| {
                ui.label(self.t("time-taken"));
                ui.label(format_clock(result.duration));
                ui.end_row();
                ui.label(self.t("correct-answers"));
                ui.label(result.correct.to_string());
                ui.end_row();
                ui.label(self.t("wrong-answers"));
                ui.label(result.wrong.to_string());
                ui.end_row();
                ui.label(self.t("accuracy"));
                ui.label(format!("{}%", result.accuracy.round()));
                ui.end_row();
            });
            self.message_line(ui);
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button(self.t("play-again")).clicked() {
                    self.play_again();
                }
                if ui.button(self.t("view-progress")).clicked() {
                    self.screen = Screen::Progress;
                }
                if ui.button(self.t("back-to-menu")).clicked() {
                    self.screen = Screen::Menu;
                }
            });
        });
    }

    fn progress_screen(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.t("your-progress"));
        let global = &self.stats.global;
        egui::Grid::new("global_stats").spacing([24.0, 6.0]).show(ui, |ui| {
            ui.label(self.t("total-quizzes"));
            ui.label(global.total_sessions.to_string());
            ui.end_row();
            ui.label(self.t("average-accuracy"));
            ui.label(format!("{}%", global.average_accuracy.round()));
            ui.end_row();
            ui.label(self.t("best-time"));
            ui.label(format_best_time(global.best_duration));
            ui.end_row();
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let accuracy = self.t("accuracy-over-time");
            let time = self.t("time-per-quiz");
            let tables = self.t("performance-by-table");
            ui.selectable_value(&mut self.chart, ChartKind::Accuracy, accuracy);
            ui.selectable_value(&mut self.chart, ChartKind::Time, time);
            ui.selectable_value(&mut self.chart, ChartKind::TablePerformance, tables);
        });
        ui.add_space(8.0);

        match self.chart {
            ChartKind::Accuracy => {
                charts::line(ui, &self.stats.recent_accuracy, 100.0, SUCCESS);
            }
            ChartKind::Time => {
                let durations: Vec<f64> =
                    self.stats.recent_durations.iter().map(|d| *d as f64).collect();
                let max = durations.iter().copied().fold(0.0, f64::max);
                charts::line(ui, &durations, max, ACCENT);
            }
            ChartKind::TablePerformance => {
                let labels: Vec<String> = Table::all().map(|t| format!("{}x", t.get())).collect();
                charts::bars(ui, &self.stats.table_average_accuracy, &labels, 100.0, ACCENT);
            }
        }

        ui.add_space(12.0);
        if ui.button(self.t("back-to-menu")).clicked() {
            self.screen = Screen::Menu;
        }
    }

    fn message_line(&self, ui: &mut egui::Ui) {
        if let Some(message) = &self.message {
            ui.label(egui::RichText::new(message).color(ERROR));
        }
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Utc::now();
        let events = self.session.poll(now);
        self.apply(events);
        self.feedback.poll(now);
        for due in [self.session.next_timer_due(), self.feedback.next_due()]
            .into_iter()
            .flatten()
        {
            ctx.request_repaint_after((due - now).to_std().unwrap_or_default());
        }

        // A quiz that is no longer running cannot own the game screens.
        if matches!(self.screen, Screen::Countdown | Screen::Game)
            && !matches!(self.session.phase(), PhaseKind::Countdown | PhaseKind::Active)
        {
            self.screen = Screen::Menu;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.top_bar(ui);
            match self.screen {
                Screen::Menu => self.menu_screen(ui),
                Screen::Countdown => self.countdown_screen(ui),
                Screen::Game => self.game_screen(ui),
                Screen::Results => self.results_screen(ui),
                Screen::Progress => self.progress_screen(ui),
            }
        });
    }
}
