use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::domain::bet::Bet;
use crate::domain::card::Card;
use crate::domain::coins::Coins;
use crate::domain::deck::CardDeck;
use crate::domain::player::Player;
use crate::domain::roster::{Roster, RosterFactory};
use crate::domain::settings::GameSettings;
use crate::domain::SeatIndex;
use crate::engine::errors::{BetRejection, EngineError};
use crate::engine::history::{GameEventKind, GameHistory, RoundResult};
use crate::engine::idle::{IdleClock, IdleState};
use crate::engine::notify::{GameNotifier, NoOpNotifier};
use crate::engine::pacing::{Pacer, SpeedMode, ThreadSleepPacer};
use crate::engine::sequencer::RoundSequencer;
use crate::engine::validation::{
    bet_input_constraints, check_budget, validate_human_bet, BetInputConstraints,
};
use crate::engine::RandomSource;
use crate::rating::{Leaderboard, RatingSystem};

/// Итог игры. Создаётся один раз и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEndState {
    pub winner: Player,
    pub leaderboard: Leaderboard,
}

/// Статус игры для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    /// Ход человека, движок ждёт `place_bet_for_human_player`.
    AwaitingHuman { seat: SeatIndex },
    Finished { winner: SeatIndex },
    /// AI нарушил инвариант бюджета – игра остановлена навсегда.
    Halted,
}

/// Роли места в текущем раунде. Выводятся из `RoundSequencer` при чтении.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatRoles {
    pub is_first_in_round: bool,
    pub is_current_player: bool,
    pub is_round_winner: bool,
}

/// Движок одной игры.
///
/// Владеет ростером, колодой, текущей картой и очерёдностью ходов.
/// Снаружи только две мутации: `start_game` и `place_bet_for_human_player`
/// (плюс `penalize_exit` при досрочном выходе). Ходы AI идут синхронно
/// внутри этих вызовов, пока очередь не дойдёт до человека или игра не кончится.
pub struct GameEngine {
    pub(crate) settings: GameSettings,
    pub(crate) speed: SpeedMode,
    pub(crate) players: Vec<Player>,
    pub(crate) deck: CardDeck,
    pub(crate) card: Option<Card>,
    pub(crate) sequencer: RoundSequencer,
    pub(crate) human_seat: SeatIndex,
    /// Номер текущего раунда, с 1.
    pub(crate) round: u32,
    pub(crate) started: bool,
    /// AI нарушил инвариант – дальше играть нельзя.
    pub(crate) halted: bool,
    pub(crate) game_end: Option<GameEndState>,
    pub(crate) history: GameHistory,
    pub(crate) rounds: Vec<RoundResult>,
    pub(crate) idle: IdleClock,
    rating: Box<dyn RatingSystem>,
    notifier: Box<dyn GameNotifier>,
    pacer: Box<dyn Pacer>,
}

impl GameEngine {
    /// Собрать движок из готовой рассадки и колоды.
    pub fn new(
        roster: Roster,
        deck: CardDeck,
        settings: GameSettings,
        rating: Box<dyn RatingSystem>,
    ) -> Result<Self, EngineError> {
        let Roster {
            mut players,
            first_player,
        } = roster;

        if players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers(players.len()));
        }
        let human_seat = players
            .iter()
            .position(|p| p.is_human)
            .ok_or(EngineError::MissingHumanSeat)?;

        // id игрока = индекс места.
        for (seat, p) in players.iter_mut().enumerate() {
            p.id = seat as u64;
            p.bet = None;
        }

        let sequencer = RoundSequencer::starting_at(players.len(), first_player);

        Ok(Self {
            settings,
            speed: SpeedMode::Normal,
            players,
            deck,
            card: None,
            sequencer,
            human_seat,
            round: 1,
            started: false,
            halted: false,
            game_end: None,
            history: GameHistory::new(),
            rounds: Vec::new(),
            idle: IdleClock::new(),
            rating,
            notifier: Box::new(NoOpNotifier),
            pacer: Box::new(ThreadSleepPacer),
        })
    }

    /// Сборка без проверок – для восстановления из снапшота.
    pub(crate) fn restore(
        players: Vec<Player>,
        deck: CardDeck,
        settings: GameSettings,
        sequencer: RoundSequencer,
        rating: Box<dyn RatingSystem>,
    ) -> Self {
        let human_seat = players.iter().position(|p| p.is_human).unwrap_or(0);
        Self {
            settings,
            speed: SpeedMode::Normal,
            players,
            deck,
            card: None,
            sequencer,
            human_seat,
            round: 1,
            started: false,
            halted: false,
            game_end: None,
            history: GameHistory::new(),
            rounds: Vec::new(),
            idle: IdleClock::new(),
            rating,
            notifier: Box::new(NoOpNotifier),
            pacer: Box::new(ThreadSleepPacer),
        }
    }

    /// Рассадка и колода по настройкам.
    pub fn for_settings<R: RandomSource>(
        settings: GameSettings,
        player_name: &str,
        rating: Box<dyn RatingSystem>,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let roster = RosterFactory::new(settings.clone()).create_players(player_name, rng);
        let deck = CardDeck::new(settings.num_of_card_decks, rng);
        Self::new(roster, deck, settings, rating)
    }

    pub fn with_speed(mut self, speed: SpeedMode) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn GameNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    // ---------------------------------------------------------------------
    // Чтение состояния
    // ---------------------------------------------------------------------

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn goal_score(&self) -> u32 {
        self.settings.goal_score
    }

    pub fn speed(&self) -> SpeedMode {
        self.speed
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn card(&self) -> Option<Card> {
        self.card
    }

    pub fn game_end_state(&self) -> Option<&GameEndState> {
        self.game_end.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.game_end.is_some()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn round_number(&self) -> u32 {
        self.round
    }

    pub fn sequencer(&self) -> &RoundSequencer {
        &self.sequencer
    }

    pub fn current_seat(&self) -> SeatIndex {
        self.sequencer.current_player()
    }

    pub fn human_seat(&self) -> SeatIndex {
        self.human_seat
    }

    pub fn human(&self) -> &Player {
        &self.players[self.human_seat]
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Итоги сыгранных раундов по порядку.
    pub fn round_log(&self) -> &[RoundResult] {
        &self.rounds
    }

    pub fn cards_left_in_deck(&self) -> usize {
        self.deck.len()
    }

    pub fn leaderboard(&self) -> Leaderboard {
        self.rating.current()
    }

    pub fn roles(&self, seat: SeatIndex) -> SeatRoles {
        SeatRoles {
            is_first_in_round: self.sequencer.first_player() == seat,
            is_current_player: self.sequencer.current_player() == seat,
            is_round_winner: self.sequencer.round_winner() == Some(seat),
        }
    }

    pub fn status(&self) -> GameStatus {
        if let Some(end) = &self.game_end {
            return GameStatus::Finished {
                winner: end.winner.seat(),
            };
        }
        if self.halted {
            return GameStatus::Halted;
        }
        if !self.started {
            return GameStatus::NotStarted;
        }
        GameStatus::AwaitingHuman {
            seat: self.current_seat(),
        }
    }

    /// Ограничения для поля ввода ставки. Только когда ход человека.
    pub fn bet_input_constraints(&self) -> Option<BetInputConstraints> {
        if !self.started
            || self.halted
            || self.is_over()
            || self.current_seat() != self.human_seat
        {
            return None;
        }
        let human = self.human();
        if human.has_acted() {
            return None;
        }
        Some(bet_input_constraints(human, &self.players))
    }

    /// Вектор наблюдения для обучения AI (с позиции человека):
    /// `[первый игрок, очки карты, не хватает очков, монеты]`, затем для каждого
    /// соперника `[не хватает очков, монеты, ставка]` (Pass = 0, нет ставки = -1).
    pub fn observation(&self) -> Vec<i64> {
        let goal = self.settings.goal_score;
        let human = self.human();

        let mut state = vec![
            self.sequencer.first_player() as i64,
            self.card.map(|c| c.points() as i64).unwrap_or(0),
            human.points_missing(goal) as i64,
            human.coins.0 as i64,
        ];

        for opponent in self.players.iter().filter(|p| !p.is_human) {
            state.push(opponent.points_missing(goal) as i64);
            state.push(opponent.coins.0 as i64);
            state.push(match opponent.bet {
                None => -1,
                Some(bet) => bet.amount().0 as i64,
            });
        }

        state
    }

    /// Все допустимые ставки человека: Pass, затем `min_bet..=max_bet`.
    /// Пусто, если сейчас не ход человека.
    pub fn valid_bets(&self) -> Vec<Bet> {
        match self.bet_input_constraints() {
            None => Vec::new(),
            Some(c) if !c.can_bet => vec![Bet::Pass],
            Some(c) => std::iter::once(Bet::Pass)
                .chain((c.min_bet.0..=c.max_bet.0).map(Bet::coins))
                .collect(),
        }
    }

    /// Награда человеку за последний шаг (для обучения):
    /// ±100 за конец игры, очки карты + 1 за выигранный раунд, иначе 1.
    pub fn human_reward(&self) -> i64 {
        if let Some(end) = &self.game_end {
            return if end.winner.is_human { 100 } else { -100 };
        }
        match self.rounds.last() {
            Some(last) if last.winner == Some(self.human_seat) => last.card.points() as i64 + 1,
            _ => 1,
        }
    }

    // ---------------------------------------------------------------------
    // Мутации
    // ---------------------------------------------------------------------

    /// Старт игры: первая карта, пауза, затем ходы AI до очереди человека.
    pub fn start_game<R: RandomSource>(&mut self, rng: &mut R) -> Result<GameStatus, EngineError> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        if self.started {
            return Err(EngineError::GameAlreadyStarted);
        }
        self.started = true;

        self.history.push(GameEventKind::GameStarted {
            player_count: self.players.len(),
            first_player: self.sequencer.first_player(),
        });
        info!(
            players = self.players.len(),
            first_player = self.sequencer.first_player(),
            goal = self.settings.goal_score,
            "game started"
        );

        self.draw_new_card(rng);
        self.pause();

        if self.players[self.current_seat()].is_human {
            self.await_human();
        } else {
            self.execute_ai_player_moves(rng)?;
        }
        Ok(self.status())
    }

    /// Ставка человека из UI.
    ///
    /// Некорректная ставка отклоняется до любых изменений состояния
    /// (`EngineError::InvalidBet`) – UI просто спрашивает ещё раз.
    pub fn place_bet_for_human_player<R: RandomSource>(
        &mut self,
        bet: Bet,
        rng: &mut R,
    ) -> Result<GameStatus, EngineError> {
        self.ensure_playable()?;

        let seat = self.current_seat();
        if !self.players[seat].is_human {
            return Err(EngineError::NotHumansTurn(seat));
        }

        let human = &self.players[seat];
        if let Err(err) = validate_human_bet(human, &bet, &self.players) {
            warn!(seat, %bet, coins = human.coins.0, "human bet rejected");
            return Err(err);
        }
        let had_choice = bet_input_constraints(human, &self.players).can_bet;

        self.idle.clear();
        self.record_bet(seat, bet);
        self.notifier.human_bet_placed(seat, bet, had_choice);
        self.pause();

        self.progress(rng)?;
        self.execute_ai_player_moves(rng)?;
        Ok(self.status())
    }

    /// Штраф человеку за выход посреди игры. Работает с любым текущим состоянием.
    pub fn penalize_exit(&mut self) -> Result<Leaderboard, EngineError> {
        let human = self
            .players
            .get(self.human_seat)
            .filter(|p| p.is_human)
            .ok_or(EngineError::MissingHumanSeat)?;

        let leaderboard = self.rating.penalize_exit(human);
        self.idle.clear();
        self.history.push(GameEventKind::ExitPenalized {
            seat: self.human_seat,
        });
        Ok(leaderboard)
    }

    /// Прошло `delta_secs` секунд, пока ждём человека.
    pub fn elapse_idle(&mut self, delta_secs: i32) -> IdleState {
        let state = self.idle.elapse(delta_secs);
        if let IdleState::TimedOut(seat) = state {
            debug!(seat, "human idle timeout");
            self.notifier.idle_timeout(seat);
        }
        state
    }

    // ---------------------------------------------------------------------
    // Внутренний протокол хода
    // ---------------------------------------------------------------------

    fn ensure_playable(&self) -> Result<(), EngineError> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        if !self.started {
            return Err(EngineError::GameNotStarted);
        }
        if self.game_end.is_some() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    fn execute_ai_player_moves<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        while self.game_end.is_none() {
            let seat = self.current_seat();
            if self.players[seat].is_human {
                break;
            }
            self.place_bet_for_ai_player(seat, rng)?;
            self.pause();
            self.progress(rng)?;
        }
        Ok(())
    }

    fn place_bet_for_ai_player<R: RandomSource>(
        &mut self,
        seat: SeatIndex,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let card = self.card.ok_or(EngineError::Internal("нет карты на столе"))?;
        let player = &self.players[seat];
        let bet = player
            .strategy
            .generate_bet(card.points(), &self.players, player, rng);

        if let Err(rejection) = check_budget(player, &bet) {
            let available = player.coins;
            error!(seat, %bet, coins = available.0, ?rejection, "AI strategy broke the budget invariant");
            self.halted = true;
            let bet = match rejection {
                BetRejection::OverBudget { bet, .. } => bet,
                _ => bet.amount(),
            };
            return Err(EngineError::AiBetOverBudget {
                seat,
                bet,
                available,
            });
        }

        self.record_bet(seat, bet);
        self.notifier.ai_bet_placed(seat, bet);
        Ok(())
    }

    fn record_bet(&mut self, seat: SeatIndex, bet: Bet) {
        let player = &mut self.players[seat];
        let coins_before = player.coins;
        player.bet = Some(bet);

        debug!(seat, name = %player.name, %bet, coins = coins_before.0, "bet placed");
        self.history.push(GameEventKind::BetPlaced {
            seat,
            bet,
            coins_before,
        });
        self.notifier.state_changed();
    }

    /// После ставки: либо следующий игрок, либо подведение раунда.
    fn progress<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        if self.sequencer.have_all_players_acted() {
            self.pause();
            self.update_round_winning_player()?;
            self.pause();

            match self.overall_winner() {
                Some(winner) => self.finish_game(winner),
                None => self.progress_to_next_round(rng),
            }
        } else {
            let next = self.sequencer.advance_to_next_player();
            if self.players[next].is_human {
                self.await_human();
            }
            self.notifier.state_changed();
        }
        Ok(())
    }

    fn update_round_winning_player(&mut self) -> Result<(), EngineError> {
        let card = self.card.ok_or(EngineError::Internal("нет карты на столе"))?;

        let any_coin_bet = self
            .players
            .iter()
            .any(|p| matches!(p.bet, Some(Bet::Coins(_))));

        if !any_coin_bet {
            info!(round = self.round, %card, "everyone passed");
            self.history.push(GameEventKind::RoundPassed { round: self.round });
            self.rounds.push(RoundResult {
                round: self.round,
                card,
                winner: None,
                winning_bet: Coins::ZERO,
            });
            return Ok(());
        }

        let winner_seat = round_winner(&self.players).ok_or(EngineError::NoBetsPlaced)?;
        let points = card.points();

        let paid = {
            let winner = &mut self.players[winner_seat];
            let paid = winner.bet.map(|b| b.amount()).unwrap_or(Coins::ZERO);
            winner.coins -= paid;
            winner.score += points;
            paid
        };
        self.sequencer.set_round_winner(winner_seat);

        // Утешительная монета всем остальным.
        let mut consoled = Vec::with_capacity(self.players.len() - 1);
        for (seat, p) in self.players.iter_mut().enumerate() {
            if seat != winner_seat {
                p.coins += Coins(1);
                consoled.push(seat);
            }
        }

        let winner = &self.players[winner_seat];
        info!(
            round = self.round,
            seat = winner_seat,
            name = %winner.name,
            paid = paid.0,
            points,
            score = winner.score,
            "round won"
        );
        self.history.push(GameEventKind::RoundWon {
            round: self.round,
            seat: winner_seat,
            paid,
            points,
        });
        self.history
            .push(GameEventKind::ConsolationPaid { seats: consoled });
        self.rounds.push(RoundResult {
            round: self.round,
            card,
            winner: Some(winner_seat),
            winning_bet: paid,
        });
        self.notifier
            .round_won(winner_seat, winner.is_human, points);
        self.notifier.state_changed();
        Ok(())
    }

    fn overall_winner(&self) -> Option<SeatIndex> {
        self.players
            .iter()
            .position(|p| p.score >= self.settings.goal_score)
    }

    fn finish_game(&mut self, winner_seat: SeatIndex) {
        let winner = self.players[winner_seat].clone();
        let leaderboard = self.rating.update_ratings(&self.players, &winner);

        info!(seat = winner_seat, name = %winner.name, score = winner.score, "game over");
        self.history.push(GameEventKind::GameFinished {
            winner: winner_seat,
            final_score: winner.score,
        });
        self.notifier.game_over(winner_seat, winner.is_human);
        self.idle.clear();
        self.game_end = Some(GameEndState {
            winner,
            leaderboard,
        });
        self.notifier.state_changed();
    }

    fn progress_to_next_round<R: RandomSource>(&mut self, rng: &mut R) {
        for p in self.players.iter_mut() {
            p.bet = None;
        }
        self.card = None;
        self.notifier.state_changed();
        self.pause();

        let first = self.sequencer.advance_to_next_round();
        self.round += 1;
        self.history.push(GameEventKind::NextRound {
            round: self.round,
            first_player: first,
        });
        self.pause();

        self.draw_new_card(rng);
        if self.players[first].is_human {
            self.await_human();
        }
    }

    fn draw_new_card<R: RandomSource>(&mut self, rng: &mut R) {
        let card = self.deck.draw_card(rng);
        self.card = Some(card);
        info!(round = self.round, %card, points = card.points(), "card drawn");
        self.history.push(GameEventKind::CardDrawn {
            round: self.round,
            card,
        });
        self.notifier.card_drawn(card);
        self.notifier.state_changed();
    }

    fn await_human(&mut self) {
        let seat = self.current_seat();
        self.idle.start(seat);
        self.notifier.idling(seat);
    }

    fn pause(&mut self) {
        self.pacer.pause(self.speed);
    }
}

/// Победитель раунда: максимальная ставка монетами,
/// при равенстве – меньший индекс места. None – ставок монетами нет.
pub fn round_winner(players: &[Player]) -> Option<SeatIndex> {
    let mut best: Option<(SeatIndex, Coins)> = None;
    for (seat, p) in players.iter().enumerate() {
        if let Some(Bet::Coins(amount)) = p.bet {
            match best {
                Some((_, top)) if amount <= top => {}
                _ => best = Some((seat, amount)),
            }
        }
    }
    best.map(|(seat, _)| seat)
}
