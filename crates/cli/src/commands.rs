//! Subcommand definitions and their effect on the repository.

use anyhow::{bail, Result};
use chrono::TimeZone;
use clap::{Subcommand, ValueEnum};
use habitally_core::{
    prompts, Calendar, FrequencyType, Goal, GoalCategory, GoalId, Habit, HabitCategory, HabitId,
    MeditationSession, MeditationType, Milestone, MilestoneId, Mood, Priority, PromptPeriod,
    Reflection, RoutineId, RoutineTemplate, Time,
};
use habitally_progress::{
    active_goals_by_urgency, completed_goals_recent_first, current_streak, progress_for_date,
    Overview, OverviewInput, StatsConfig,
};
use habitally_store::Repository;

use crate::theme;

/// One day.
const MAX_SESSION_MINUTES: i64 = 24 * 60;
/// A century.
const MAX_GOAL_MONTHS: i64 = 1200;
const MAX_MILESTONE_DAYS: i64 = 36_500;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage habits
    #[command(subcommand)]
    Habit(HabitCommand),
    /// Manage goals and milestones
    #[command(subcommand)]
    Goal(GoalCommand),
    /// Manage routines
    #[command(subcommand)]
    Routine(RoutineCommand),
    /// Answer a reflection prompt
    Reflect {
        /// Your answer
        response: String,
        /// Prompt pool to draw from
        #[arg(long, value_enum, default_value = "daily")]
        period: Period,
        /// How you feel (Excellent, Good, Okay, Challenging, Difficult)
        #[arg(long)]
        mood: Option<Mood>,
        /// Something you are grateful for (repeatable)
        #[arg(long)]
        gratitude: Vec<String>,
        /// Free-form insights
        #[arg(long, default_value = "")]
        insights: String,
    },
    /// Log a meditation session
    Meditate {
        /// Minutes meditated
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_SESSION_MINUTES))]
        minutes: u32,
        /// Kind of meditation
        #[arg(long = "type", default_value = "Mindfulness")]
        kind: MeditationType,
        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show dashboard counters
    Overview {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mark onboarding as finished
    Onboard,
    /// Delete all data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum HabitCommand {
    /// Create a habit
    Add {
        /// Habit name
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "Health")]
        category: HabitCategory,
        /// Completions needed per period
        #[arg(long, default_value = "1")]
        target: u32,
        #[arg(long, default_value = "Daily")]
        frequency: FrequencyType,
        /// Shown after each completion; a random one is used if omitted
        #[arg(long)]
        message: Option<String>,
    },
    /// List habits with today's progress
    List,
    /// Log a completion now
    Done {
        id: HabitId,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Pause or resume a habit
    Toggle { id: HabitId },
    /// Delete a habit
    Delete { id: HabitId },
}

#[derive(Debug, Subcommand)]
pub enum GoalCommand {
    /// Create a goal
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "Personal")]
        category: GoalCategory,
        #[arg(long, default_value = "Medium")]
        priority: Priority,
        /// Target date in months from today
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(0..=MAX_GOAL_MONTHS))]
        months: u32,
    },
    /// List open goals by urgency, then completed ones
    List,
    /// Add a milestone due in some days
    Milestone {
        goal: GoalId,
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u32).range(0..=MAX_MILESTONE_DAYS))]
        days: u32,
    },
    /// Flip a milestone's completion
    Toggle { goal: GoalId, milestone: MilestoneId },
    /// Mark a goal completed
    Complete { id: GoalId },
    /// Delete a goal
    Delete { id: GoalId },
}

#[derive(Debug, Subcommand)]
pub enum RoutineCommand {
    /// Show the built-in templates
    Templates,
    /// Create a routine from a template (Morning, Evening, Workout, Study)
    Add { template: RoutineTemplate },
    /// List routines
    List,
    /// Log a routine run now
    Done {
        id: RoutineId,
        #[arg(long)]
        notes: Option<String>,
        /// Minutes it actually took
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_SESSION_MINUTES))]
        minutes: Option<u32>,
    },
    /// Delete a routine
    Delete { id: RoutineId },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl From<Period> for PromptPeriod {
    fn from(period: Period) -> Self {
        match period {
            Period::Daily => PromptPeriod::Daily,
            Period::Weekly => PromptPeriod::Weekly,
            Period::Monthly => PromptPeriod::Monthly,
        }
    }
}

/// Apply `command` to `repo` as of `now`, printing results to stdout.
pub fn execute<Tz: TimeZone>(
    command: Command,
    repo: &mut Repository,
    calendar: &Calendar<Tz>,
    stats: &StatsConfig,
    now: Time,
) -> Result<()> {
    match command {
        Command::Habit(cmd) => habit(cmd, repo, calendar, now),
        Command::Goal(cmd) => goal(cmd, repo, calendar, now),
        Command::Routine(cmd) => routine(cmd, repo, calendar, now),
        Command::Reflect {
            response,
            period,
            mood,
            gratitude,
            insights,
        } => {
            let prompt = prompts::random_prompt(period.into(), &mut rand::thread_rng());
            println!("{}", prompt.question);
            let mut reflection = Reflection::at(now, prompt, response)
                .with_gratitude(gratitude)
                .with_insights(insights);
            if let Some(mood) = mood {
                println!("Feeling {} {}", theme::mood_emoji(mood), mood.description());
                reflection = reflection.with_mood(mood);
            }
            repo.add_reflection(reflection);
            Ok(())
        }
        Command::Meditate {
            minutes,
            kind,
            notes,
        } => {
            let mut session = MeditationSession::at(now, minutes, kind);
            if let Some(notes) = notes {
                session = session.with_notes(notes);
            }
            println!(
                "{} {} for {}",
                theme::meditation_symbol(kind),
                kind,
                theme::format_minutes(session.duration)
            );
            repo.add_meditation_session(session);
            Ok(())
        }
        Command::Overview { json } => {
            let input = OverviewInput {
                habits: repo.habits(),
                goals: repo.goals(),
                routines: repo.routines(),
                reflections: repo.reflections(),
                sessions: repo.meditation_sessions(),
            };
            let overview = Overview::compute(&input, now, calendar, stats);
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print_overview(&overview);
            }
            Ok(())
        }
        Command::Onboard => {
            repo.set_onboarding_completed(true);
            Ok(())
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("refusing to delete all data without --yes");
            }
            repo.reset_all();
            println!("All data deleted");
            Ok(())
        }
    }
}

fn habit<Tz: TimeZone>(cmd: HabitCommand, repo: &mut Repository, calendar: &Calendar<Tz>, now: Time) -> Result<()> {
    match cmd {
        HabitCommand::Add {
            name,
            description,
            category,
            target,
            frequency,
            message,
        } => {
            let habit = Habit::new(name, description, category)
                .with_target(target, frequency)
                .with_motivational_message(message.unwrap_or_default())
                .created_at(now);
            println!("Added habit {} {}", habit.id, habit.name);
            repo.add_habit(habit);
        }
        HabitCommand::List => {
            for habit in repo.habits() {
                let progress = progress_for_date(habit, now, calendar);
                println!(
                    "{} {} {} {} ({} {}) streak {}{}",
                    habit.id,
                    theme::habit_symbol(habit.category),
                    theme::progress_bar(progress, 8),
                    habit.name,
                    habit.effective_target(),
                    theme::frequency_unit(habit.frequency_type),
                    current_streak(habit, now, calendar),
                    if habit.is_active { "" } else { " [paused]" },
                );
            }
        }
        HabitCommand::Done { id, notes } => {
            if !repo.complete_habit_at(id, now, notes) {
                bail!("no habit with id {id}");
            }
            if let Some(habit) = repo.habit(id) {
                println!("{}", habit.motivational_message);
            }
        }
        HabitCommand::Toggle { id } => {
            let Some(mut habit) = repo.habit(id).cloned() else {
                bail!("no habit with id {id}");
            };
            habit.is_active = !habit.is_active;
            repo.update_habit(habit);
        }
        HabitCommand::Delete { id } => {
            if !repo.delete_habit(id) {
                bail!("no habit with id {id}");
            }
        }
    }
    Ok(())
}

fn goal<Tz: TimeZone>(cmd: GoalCommand, repo: &mut Repository, calendar: &Calendar<Tz>, now: Time) -> Result<()> {
    match cmd {
        GoalCommand::Add {
            title,
            description,
            category,
            priority,
            months,
        } => {
            let goal = Goal::new(title, description, category, calendar.add_months(months, now), priority)
                .created_at(now);
            println!("Added goal {} {}", goal.id, goal.title);
            repo.add_goal(goal);
        }
        GoalCommand::List => {
            for goal in active_goals_by_urgency(repo.goals()) {
                println!(
                    "{} {} {}{} {} {} days left{}",
                    goal.id,
                    theme::goal_symbol(goal.category),
                    goal.title,
                    theme::priority_marker(goal.priority),
                    theme::progress_bar(goal.progress(), 8),
                    goal.days_remaining(now, calendar),
                    if goal.is_overdue(now) { " [overdue]" } else { "" },
                );
                for milestone in &goal.milestones {
                    println!(
                        "    {} [{}] {}",
                        milestone.id,
                        if milestone.is_completed { "x" } else { " " },
                        milestone.title
                    );
                }
            }
            for goal in completed_goals_recent_first(repo.goals()) {
                println!("{} {} {} (completed)", goal.id, theme::goal_symbol(goal.category), goal.title);
            }
        }
        GoalCommand::Milestone {
            goal,
            title,
            description,
            days,
        } => {
            let milestone = Milestone::new(title, description, calendar.days_after(days, now));
            if !repo.add_milestone(goal, milestone) {
                bail!("no goal with id {goal}");
            }
        }
        GoalCommand::Toggle { goal, milestone } => {
            if !repo.toggle_milestone_at(goal, milestone, now) {
                bail!("no milestone {milestone} in goal {goal}");
            }
        }
        GoalCommand::Complete { id } => {
            if !repo.complete_goal(id) {
                bail!("no goal with id {id}");
            }
        }
        GoalCommand::Delete { id } => {
            if !repo.delete_goal(id) {
                bail!("no goal with id {id}");
            }
        }
    }
    Ok(())
}

fn routine<Tz: TimeZone>(
    cmd: RoutineCommand,
    repo: &mut Repository,
    calendar: &Calendar<Tz>,
    now: Time,
) -> Result<()> {
    match cmd {
        RoutineCommand::Templates => {
            for template in RoutineTemplate::ALL {
                let routine = template.build();
                println!(
                    "{:<8} {} ({}, {})",
                    template,
                    routine.name,
                    routine.time_of_day,
                    theme::format_minutes(routine.estimated_duration())
                );
            }
        }
        RoutineCommand::Add { template } => {
            let routine = template.build_on(now, calendar);
            println!("Added routine {} {}", routine.id, routine.name);
            repo.add_routine(routine);
        }
        RoutineCommand::List => {
            for routine in repo.routines() {
                println!(
                    "{} {} ({}, {}) streak {}",
                    routine.id,
                    routine.name,
                    routine.time_of_day,
                    theme::format_minutes(routine.estimated_duration()),
                    current_streak(routine, now, calendar)
                );
                for activity in routine.sorted_activities() {
                    println!(
                        "    {}. {} {}{}",
                        activity.order,
                        activity.name,
                        theme::format_minutes(activity.estimated_minutes),
                        if activity.is_optional { " (optional)" } else { "" }
                    );
                }
            }
        }
        RoutineCommand::Done { id, notes, minutes } => {
            if !repo.complete_routine_at(id, now, notes, minutes) {
                bail!("no routine with id {id}");
            }
        }
        RoutineCommand::Delete { id } => {
            if !repo.delete_routine(id) {
                bail!("no routine with id {id}");
            }
        }
    }
    Ok(())
}

fn print_overview(overview: &Overview) {
    println!("Habitally overview");
    println!(
        "  Habits: {}/{} active done today ({:.0}%), best streak {}",
        overview.habits_completed_today,
        overview.active_habits,
        overview.today_completion_rate * 100.0,
        overview.best_habit_streak
    );
    println!(
        "  Routines: {}/{} active done today, best streak {}",
        overview.routines_completed_today, overview.active_routines, overview.best_routine_streak
    );
    println!(
        "  Goals: {} active, {} completed ({:.0}% success), {} overdue",
        overview.active_goals,
        overview.completed_goals,
        overview.goal_success_rate * 100.0,
        overview.overdue_goals
    );
    println!(
        "  Reflections this week: {}{}",
        overview.reflections_this_week,
        if overview.has_reflected_today { " (reflected today)" } else { "" }
    );
    println!(
        "  Meditation: {} recently, {} total",
        theme::format_minutes(overview.meditation_minutes),
        theme::format_minutes(overview.lifetime_meditation_minutes)
    );
    for report in &overview.habits {
        let strip: String = report
            .recent
            .iter()
            .map(|day| if day.completed { '#' } else { '.' })
            .collect();
        println!(
            "    {:<24} {} {:>3.0}% streak {} (best {})",
            report.name,
            strip,
            report.completion_rate * 100.0,
            report.current_streak,
            report.longest_streak
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["habitally"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().command
    }

    fn now() -> Time {
        Utc.with_ymd_and_hms(2025, 10, 20, 18, 0, 0).unwrap()
    }

    fn run(repo: &mut Repository, args: &[&str]) -> Result<()> {
        execute(parse(args), repo, &Calendar::new(Utc), &StatsConfig::default(), now())
    }

    #[test]
    fn test_habit_flow() {
        let mut repo = Repository::new();
        run(&mut repo, &["habit", "add", "Stretch", "--category", "fitness", "--target", "2"]).unwrap();
        let id = repo.habits()[0].id.to_string();
        assert_eq!(repo.habits()[0].target_frequency, 2);

        run(&mut repo, &["habit", "done", &id]).unwrap();
        run(&mut repo, &["habit", "done", &id, "--notes", "evening"]).unwrap();
        assert_eq!(repo.habits()[0].completions.len(), 2);

        run(&mut repo, &["habit", "toggle", &id]).unwrap();
        assert!(!repo.habits()[0].is_active);

        run(&mut repo, &["habit", "delete", &id]).unwrap();
        assert!(run(&mut repo, &["habit", "done", &id]).is_err());
    }

    #[test]
    fn test_goal_flow() {
        let mut repo = Repository::new();
        run(&mut repo, &["goal", "add", "Run a marathon", "--priority", "critical", "--months", "6"]).unwrap();
        let goal = repo.goals()[0].id.to_string();
        run(&mut repo, &["goal", "milestone", &goal, "10k", "--days", "30"]).unwrap();
        run(&mut repo, &["goal", "milestone", &goal, "5k", "--days", "10"]).unwrap();

        let titles: Vec<&str> = repo.goals()[0].milestones.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["5k", "10k"]);

        let milestone = repo.goals()[0].milestones[0].id.to_string();
        run(&mut repo, &["goal", "toggle", &goal, &milestone]).unwrap();
        assert!((repo.goals()[0].progress() - 0.5).abs() < f64::EPSILON);

        run(&mut repo, &["goal", "complete", &goal]).unwrap();
        assert!(repo.goals()[0].is_completed);
    }

    #[test]
    fn test_routine_and_mindfulness_flow() {
        let mut repo = Repository::new();
        run(&mut repo, &["routine", "add", "study"]).unwrap();
        let id = repo.routines()[0].id.to_string();
        run(&mut repo, &["routine", "done", &id, "--minutes", "65"]).unwrap();
        assert_eq!(repo.routines()[0].completions[0].duration, Some(65));

        run(&mut repo, &["reflect", "Good day", "--mood", "good", "--gratitude", "sun"]).unwrap();
        assert_eq!(repo.reflections()[0].mood, Some(Mood::Good));
        assert!(repo.reflections()[0].prompt.is_daily);

        run(&mut repo, &["meditate", "15", "--type", "loving kindness"]).unwrap();
        assert_eq!(repo.meditation_sessions()[0].kind, MeditationType::LovingKindness);

        run(&mut repo, &["overview", "--json"]).unwrap();
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        let reject = |args: &[&str]| {
            let mut argv = vec!["habitally"];
            argv.extend_from_slice(args);
            TestCli::try_parse_from(argv).is_err()
        };
        assert!(reject(&["goal", "add", "g", "--months", "4294967295"]));
        assert!(reject(&["goal", "milestone", &GoalId::new().to_string(), "m", "--days", "4294967295"]));
        assert!(reject(&["meditate", "4000000000"]));
        assert!(reject(&["meditate", "0"]));
        assert!(reject(&["routine", "done", &RoutineId::new().to_string(), "--minutes", "5000"]));
        assert!(!reject(&["goal", "add", "g", "--months", "1200"]));
        assert!(!reject(&["meditate", "1440"]));
    }

    #[test]
    fn test_routine_reminder_uses_given_day() {
        let mut repo = Repository::new();
        run(&mut repo, &["routine", "add", "evening"]).unwrap();
        let routine = &repo.routines()[0];
        assert_eq!(routine.created_date, now());
        assert_eq!(
            routine.reminder_time,
            Some(Utc.with_ymd_and_hms(2025, 10, 20, 18, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut repo = Repository::new();
        run(&mut repo, &["onboard"]).unwrap();
        assert!(run(&mut repo, &["reset"]).is_err());
        assert!(repo.has_completed_onboarding());

        run(&mut repo, &["reset", "--yes"]).unwrap();
        assert!(!repo.has_completed_onboarding());
    }
}
