use crate::content::Skill;

/// Infinite horizontal skill strip.
///
/// The list is laid out twice back to back. The stylesheet slides the track
/// left by exactly one copy per cycle, so the second copy lands where the
/// first started and the loop has no visible seam.
#[derive(Clone, Copy, Debug)]
pub struct SkillTicker<'a> {
    skills: &'a [Skill],
    cycle_seconds: u32,
}

impl<'a> SkillTicker<'a> {
    pub fn new(skills: &'a [Skill], cycle_seconds: u32) -> Self {
        Self {
            skills,
            cycle_seconds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Both copies, keyed by position so duplicates stay distinct.
    pub fn items(&self) -> impl Iterator<Item = (usize, &'a Skill)> + 'a {
        self.skills.iter().chain(self.skills.iter()).enumerate()
    }

    pub fn style(&self) -> String {
        format!(
            "--ticker-count: {}; --ticker-duration: {}s;",
            self.skills.len(),
            self.cycle_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            icon: format!("/icons/{name}.svg"),
            invert_on_dark: false,
        }
    }

    #[test]
    fn track_repeats_the_list_once() {
        let skills = vec![skill("Rust"), skill("Python"), skill("Git")];
        let ticker = SkillTicker::new(&skills, 45);

        let names: Vec<_> = ticker.items().map(|(_, skill)| skill.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Python", "Git", "Rust", "Python", "Git"]);

        let keys: Vec<_> = ticker.items().map(|(key, _)| key).collect();
        assert_eq!(keys, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn style_describes_one_copy() {
        let skills = vec![skill("Rust"), skill("Go")];
        let ticker = SkillTicker::new(&skills, 30);
        assert_eq!(ticker.style(), "--ticker-count: 2; --ticker-duration: 30s;");
    }

    #[test]
    fn empty_list_has_no_items() {
        let ticker = SkillTicker::new(&[], 45);
        assert!(ticker.is_empty());
        assert_eq!(ticker.items().count(), 0);
    }
}
