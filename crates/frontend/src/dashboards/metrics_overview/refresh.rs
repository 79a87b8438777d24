/// Упорядочивает пересекающиеся обновления дашборда.
///
/// Каждый запрос получает номер из `begin`. Ответ применяется, только если
/// ещё не был применён ответ более нового запроса: медленный ответ
/// не затирает свежие данные.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshSequence {
    issued: u64,
    applied: u64,
}

impl RefreshSequence {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// true, если ответ на `ticket` нужно применить
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket > self.applied && ticket <= self.issued {
            self.applied = ticket;
            true
        } else {
            false
        }
    }
}
