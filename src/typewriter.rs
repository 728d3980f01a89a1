//! Typing effect for the hero title.
//!
//! The machine is clock-free: the view calls [`Typewriter::tick`] whenever the
//! previously returned delay has elapsed.

pub const TYPE_MS: u64 = 85;
pub const DELETE_MS: u64 = 55;
pub const HOLD_MS: u64 = 2000;
pub const SWITCH_GAP_MS: u64 = 250;
pub const SETTLE_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const ROLES: [Role; 6] = [
    Role { label: "Creative Developer", icon: "code" },
    Role { label: "Data Scientist", icon: "brain" },
    Role { label: "Graphic Designer", icon: "pen-tool" },
    Role { label: "Prompt Engineer", icon: "message" },
    Role { label: "AI Engineer", icon: "cpu" },
    Role { label: "Young Entrepreneur", icon: "rocket" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    Pausing,
    Deleting,
    Switching,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: &'static [Role],
    role: usize,
    shown: usize,
    phase: TypePhase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(&ROLES)
    }
}

impl Typewriter {
    /// `roles` must not be empty.
    pub fn new(roles: &'static [Role]) -> Self {
        assert!(!roles.is_empty(), "typewriter needs at least one role");
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: TypePhase::Typing,
        }
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn role(&self) -> &'static Role {
        &self.roles[self.role]
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    /// The part of the current role currently on screen.
    pub fn text(&self) -> &'static str {
        let label = self.role().label;
        let end = label
            .char_indices()
            .nth(self.shown)
            .map_or(label.len(), |(i, _)| i);
        &label[..end]
    }

    pub fn is_vacant(&self) -> bool {
        self.phase == TypePhase::Switching
    }

    fn full_len(&self) -> usize {
        self.role().label.chars().count()
    }

    /// Delay until the next [`tick`](Self::tick) should run.
    pub fn delay(&self) -> u64 {
        match self.phase {
            TypePhase::Typing if self.shown < self.full_len() => TYPE_MS,
            TypePhase::Typing => SETTLE_MS,
            TypePhase::Pausing => HOLD_MS,
            TypePhase::Deleting => DELETE_MS,
            TypePhase::Switching => SWITCH_GAP_MS,
        }
    }

    /// Applies one step and returns the delay before the next one.
    pub fn tick(&mut self) -> u64 {
        match self.phase {
            TypePhase::Typing => {
                if self.shown < self.full_len() {
                    self.shown += 1;
                } else {
                    self.phase = TypePhase::Pausing;
                }
            }
            TypePhase::Pausing => self.phase = TypePhase::Deleting,
            TypePhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = TypePhase::Switching;
                }
            }
            TypePhase::Switching => {
                self.shown = 0;
                self.phase = TypePhase::Typing;
            }
        }
        self.delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::default();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.delay(), TYPE_MS);
        assert_eq!(tw.tick(), TYPE_MS);
        assert_eq!(tw.text(), "C");
        for _ in 1..ROLES[0].label.len() - 1 {
            tw.tick();
        }
        // last char typed: short settle before the hold
        assert_eq!(tw.tick(), SETTLE_MS);
        assert_eq!(tw.text(), "Creative Developer");
        assert_eq!(tw.tick(), HOLD_MS);
        assert_eq!(tw.phase(), TypePhase::Pausing);
        assert_eq!(tw.tick(), DELETE_MS);
        assert_eq!(tw.phase(), TypePhase::Deleting);
    }

    #[test]
    fn test_full_cycle_moves_to_next_role() {
        let mut tw = Typewriter::default();
        let mut elapsed = 0;
        let mut vacant_ticks = 0;
        while tw.role_index() == 0 {
            elapsed += tw.tick();
        }
        assert!(tw.is_vacant());
        assert_eq!(tw.text(), "");
        assert_eq!(tw.role().label, "Data Scientist");
        while tw.is_vacant() {
            vacant_ticks += 1;
            elapsed += tw.tick();
        }
        assert_eq!(vacant_ticks, 1);
        assert_eq!(tw.phase(), TypePhase::Typing);
        assert!(elapsed > HOLD_MS);
    }

    #[test]
    fn test_roles_wrap() {
        static ONE: [Role; 1] = [Role { label: "Hé", icon: "x" }];
        let mut tw = Typewriter::new(&ONE);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "Hé");
        while !tw.is_vacant() {
            tw.tick();
        }
        assert_eq!(tw.role_index(), 0);
    }
}
