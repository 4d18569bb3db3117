//! Build a repository from persisted collections.

use chrono::TimeZone;
use habitally_core::{Calendar, Time};
use habitally_store::{sample_goals, sample_habits, Collection, Collections, Repository};
use serde::Serialize;
use tracing::info;

use super::codec::decode_lenient;
use super::{Result, Storage};

/// Load every collection from `storage`.
///
/// Missing or undecodable habits and goals are replaced by sample data,
/// which is written back immediately. The other collections start empty and
/// the onboarding flag reads false. Only storage I/O failures are errors.
pub async fn load_repository<S, Tz>(storage: &S, now: Time, calendar: &Calendar<Tz>) -> Result<Repository>
where
    S: Storage + ?Sized,
    Tz: TimeZone,
{
    let habits = match read(storage, Collection::Habits).await? {
        Some(habits) => habits,
        None => seed(storage, Collection::Habits, sample_habits()).await?,
    };
    let goals = match read(storage, Collection::Goals).await? {
        Some(goals) => goals,
        None => seed(storage, Collection::Goals, sample_goals(now, calendar)).await?,
    };

    let data = Collections {
        habits,
        goals,
        routines: read(storage, Collection::Routines).await?.unwrap_or_default(),
        reflections: read(storage, Collection::Reflections).await?.unwrap_or_default(),
        meditation_sessions: read(storage, Collection::MeditationSessions)
            .await?
            .unwrap_or_default(),
        has_completed_onboarding: read(storage, Collection::Onboarding).await?.unwrap_or(false),
    };

    info!(
        "Loaded {} habits, {} goals, {} routines, {} reflections, {} meditation sessions",
        data.habits.len(),
        data.goals.len(),
        data.routines.len(),
        data.reflections.len(),
        data.meditation_sessions.len()
    );
    Ok(Repository::from_collections(data))
}

async fn read<S, T>(storage: &S, collection: Collection) -> Result<Option<T>>
where
    S: Storage + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let bytes = storage.load(collection.key()).await?;
    Ok(decode_lenient(collection.key(), bytes))
}

async fn seed<S, T>(storage: &S, collection: Collection, items: Vec<T>) -> Result<Vec<T>>
where
    S: Storage + ?Sized,
    T: Serialize,
{
    info!("Seeding {} sample {}", items.len(), collection);
    storage.save(collection.key(), &serde_json::to_vec(&items)?).await?;
    Ok(items)
}
