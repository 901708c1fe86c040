use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Raised while building a [`Catalog`]. Course data is validated up front so
/// a bad duration string surfaces here instead of corrupting a total later.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course `{course}`: lesson `{lesson}` has malformed duration `{value}` (expected mm:ss)")]
    MalformedDuration {
        course: String,
        lesson: String,
        value: String,
    },
    #[error("duplicate course id `{0}`")]
    DuplicateId(String),
}

/// A single lesson length, parsed from the `mm:ss` strings the content team
/// supplies. Minutes are unbounded (`"120:00"` is a two hour recording),
/// seconds must stay below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonDuration {
    minutes: u32,
    seconds: u32,
}

impl LessonDuration {
    pub fn parse(value: &str) -> Option<Self> {
        let (minutes, seconds) = value.split_once(':')?;
        if minutes.is_empty() || seconds.len() != 2 {
            return None;
        }
        if !minutes.bytes().all(|b| b.is_ascii_digit()) || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let minutes: u32 = minutes.parse().ok()?;
        let seconds: u32 = seconds.parse().ok()?;
        if seconds > 59 {
            return None;
        }
        Some(Self { minutes, seconds })
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for LessonDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub duration: LessonDuration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub topics: Vec<Topic>,
}

impl Course {
    pub fn lesson_count(&self) -> usize {
        self.topics.iter().map(|topic| topic.lessons.len()).sum()
    }

    pub fn total_seconds(&self) -> u64 {
        self.topics
            .iter()
            .flat_map(|topic| &topic.lessons)
            .map(|lesson| lesson.duration.total_seconds())
            .sum()
    }

    /// Total running time in the fixed display template, e.g. `"1 Jam 5 Menit"`
    /// or `"12 Menit"` when under an hour. Leftover seconds are dropped.
    pub fn total_duration(&self) -> String {
        let total = self.total_seconds();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        if hours > 0 {
            format!("{hours} Jam {minutes} Menit")
        } else {
            format!("{minutes} Menit")
        }
    }
}

/// Raw course literal handed over by the content team; turned into a
/// validated [`Course`] by [`Catalog::from_defs`].
pub struct CourseDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub topics: Vec<TopicDef>,
}

pub struct TopicDef {
    pub name: &'static str,
    pub lessons: &'static [(&'static str, &'static str)],
}

/// Immutable course lookup table. Built once at page mount and injected into
/// the components that need it; the order of courses is the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn from_defs(defs: Vec<CourseDef>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut courses = Vec::with_capacity(defs.len());
        for def in defs {
            if !seen.insert(def.id) {
                return Err(CatalogError::DuplicateId(def.id.to_string()));
            }
            let mut topics = Vec::with_capacity(def.topics.len());
            for topic in def.topics {
                let mut lessons = Vec::with_capacity(topic.lessons.len());
                for &(title, duration) in topic.lessons {
                    let duration = LessonDuration::parse(duration).ok_or_else(|| {
                        CatalogError::MalformedDuration {
                            course: def.id.to_string(),
                            lesson: title.to_string(),
                            value: duration.to_string(),
                        }
                    })?;
                    lessons.push(Lesson {
                        title: title.to_string(),
                        duration,
                    });
                }
                topics.push(Topic {
                    name: topic.name.to_string(),
                    lessons,
                });
            }
            courses.push(Course {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                topics,
            });
        }
        Ok(Self { courses })
    }

    /// Pure read; an absent id means the caller skips its render entirely.
    pub fn lookup(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(lessons: &'static [(&'static str, &'static str)]) -> Course {
        let catalog = Catalog::from_defs(vec![CourseDef {
            id: "demo",
            title: "Demo",
            description: "Demo course",
            topics: vec![TopicDef {
                name: "Intro",
                lessons,
            }],
        }])
        .unwrap();
        catalog.lookup("demo").unwrap().clone()
    }

    #[test]
    fn parses_zero_padded_and_long_durations() {
        assert_eq!(LessonDuration::parse("04:14").unwrap().total_seconds(), 254);
        assert_eq!(LessonDuration::parse("120:00").unwrap().total_seconds(), 7200);
        assert_eq!(LessonDuration::parse("00:10").unwrap().total_seconds(), 10);
    }

    #[test]
    fn rejects_malformed_durations() {
        for bad in ["", "04", "4:1", "04:60", ":30", "ab:cd", "4:141", "-4:10", "04:1x"] {
            assert!(LessonDuration::parse(bad).is_none(), "accepted `{bad}`");
        }
    }

    #[test]
    fn display_round_trips_padding() {
        assert_eq!(LessonDuration::parse("04:14").unwrap().to_string(), "04:14");
        assert_eq!(LessonDuration::parse("120:00").unwrap().to_string(), "120:00");
    }

    #[test]
    fn total_under_an_hour_drops_the_hours_part() {
        // 254 + 492 = 746 seconds -> 12 whole minutes
        let course = course(&[("Introduction", "04:14"), ("PHPMyAdmin", "08:12")]);
        assert_eq!(course.total_seconds(), 746);
        assert_eq!(course.total_duration(), "12 Menit");
    }

    #[test]
    fn total_over_an_hour_includes_jam() {
        // 3661 seconds -> 1 hour, 1 minute, leftover second dropped
        let course = course(&[("A", "60:00"), ("B", "01:01")]);
        assert_eq!(course.total_seconds(), 3661);
        assert_eq!(course.total_duration(), "1 Jam 1 Menit");
    }

    #[test]
    fn minutes_stay_below_sixty_in_the_breakdown() {
        let course = course(&[("A", "119:59"), ("B", "00:01")]);
        assert_eq!(course.total_duration(), "2 Jam 0 Menit");
    }

    #[test]
    fn total_is_order_independent_across_topics() {
        let forward = Catalog::from_defs(vec![CourseDef {
            id: "c",
            title: "C",
            description: "",
            topics: vec![
                TopicDef { name: "One", lessons: &[("a", "10:30")] },
                TopicDef { name: "Two", lessons: &[("b", "05:45")] },
            ],
        }])
        .unwrap();
        let reversed = Catalog::from_defs(vec![CourseDef {
            id: "c",
            title: "C",
            description: "",
            topics: vec![
                TopicDef { name: "Two", lessons: &[("b", "05:45")] },
                TopicDef { name: "One", lessons: &[("a", "10:30")] },
            ],
        }])
        .unwrap();
        assert_eq!(
            forward.lookup("c").unwrap().total_duration(),
            reversed.lookup("c").unwrap().total_duration()
        );
    }

    #[test]
    fn lookup_misses_silently() {
        let catalog = Catalog::from_defs(vec![]).unwrap();
        assert!(catalog.lookup("nope").is_none());
    }

    #[test]
    fn build_fails_fast_on_malformed_lesson() {
        let err = Catalog::from_defs(vec![CourseDef {
            id: "broken",
            title: "Broken",
            description: "",
            topics: vec![TopicDef {
                name: "Intro",
                lessons: &[("Fine", "04:14"), ("Bad", "4:7")],
            }],
        }])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::MalformedDuration {
                course: "broken".into(),
                lesson: "Bad".into(),
                value: "4:7".into(),
            }
        );
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let def = || CourseDef {
            id: "twice",
            title: "Twice",
            description: "",
            topics: vec![],
        };
        let err = Catalog::from_defs(vec![def(), def()]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("twice".into()));
    }

    #[test]
    fn courses_keep_input_order() {
        let catalog = Catalog::from_defs(vec![
            CourseDef { id: "b", title: "B", description: "", topics: vec![] },
            CourseDef { id: "a", title: "A", description: "", topics: vec![] },
        ])
        .unwrap();
        let ids: Vec<_> = catalog.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
