//! Persistence port contract, exercised against the in-memory backend.
//!
//! Each test builds fresh repositories over empty stores and a pinned clock.

use std::sync::Arc;

use coach_api::adapters::auth::{JwtAccessTokens, JwtConfig};
use coach_api::adapters::memory::{
    InMemoryClientStore, InMemoryCredentialStore, InMemoryPlanStore, InMemorySessionStore,
};
use coach_api::adapters::FixedClock;
use coach_api::application::handlers::{AdminCredentials, AuthGate};
use coach_api::application::repositories::{ClientRepository, PlanRepository, SessionRepository};
use coach_api::domain::client::{ActivityLevel, ClientUpdate, NewClient, Sex};
use coach_api::domain::foundation::{
    AuthError, AuthenticatedUser, ClientId, ErrorCode, SessionId, SessionStatus, TenantId,
};
use coach_api::domain::plan::{WeekPlan, Weekday, Workout};
use coach_api::domain::session::{NewSession, SessionTime, SessionUpdate};
use coach_api::ports::{Clock, TenantRepository};

// Monday 10 June 2024, 09:00 UTC
const NOW: &str = "2024-06-10T09:00:00Z";

struct Harness {
    clock: Arc<FixedClock>,
    clients: Arc<ClientRepository>,
    sessions: SessionRepository,
    plan_store: Arc<InMemoryPlanStore>,
    plans: PlanRepository,
}

fn harness() -> Harness {
    let clock = Arc::new(FixedClock::at(NOW).unwrap());
    let clients = Arc::new(ClientRepository::new(
        Arc::new(InMemoryClientStore::new()),
        clock.clone(),
    ));
    let sessions = SessionRepository::new(
        Arc::new(InMemorySessionStore::new()),
        clients.clone(),
        clock.clone(),
    );
    let plan_store = Arc::new(InMemoryPlanStore::new());
    let plans = PlanRepository::new(plan_store.clone(), clock.clone());
    Harness {
        clock,
        clients,
        sessions,
        plan_store,
        plans,
    }
}

fn admin() -> TenantId {
    TenantId::new("admin").unwrap()
}

fn new_client(name: &str) -> NewClient {
    NewClient {
        name: name.to_string(),
        age: 28,
        sex: Sex::Male,
        height_cm: 181.0,
        weight_kg: 84.0,
        activity_level: ActivityLevel::VeryActive,
        goals: "Cut to 80kg".to_string(),
        bmr: 1850,
        tdee: 3100,
        calorie_maintenance: 3000,
        notes: String::new(),
    }
}

fn new_session(client_id: &ClientId, date: &str, time: &str) -> NewSession {
    NewSession {
        client_id: client_id.clone(),
        date: date.parse().unwrap(),
        time: time.parse().unwrap(),
        notes: None,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Create / get / update / delete
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn get_after_create_returns_payload_plus_id_and_timestamps() {
    let h = harness();
    let payload = new_client("Bruno");

    let id = h.clients.create(&admin(), &payload).await.unwrap();
    let client = h.clients.get(&id, &admin()).await.unwrap().unwrap();

    assert_eq!(client.id, id);
    assert_eq!(client.tenant, admin());
    assert_eq!(client.name, payload.name);
    assert_eq!(client.age, payload.age);
    assert_eq!(client.sex, payload.sex);
    assert_eq!(client.height_cm, payload.height_cm);
    assert_eq!(client.weight_kg, payload.weight_kg);
    assert_eq!(client.activity_level, payload.activity_level);
    assert_eq!(client.goals, payload.goals);
    assert_eq!(client.bmr, payload.bmr);
    assert_eq!(client.tdee, payload.tdee);
    assert_eq!(client.calorie_maintenance, payload.calorie_maintenance);
    assert_eq!(client.created_at, h.clock.now());
    assert_eq!(client.updated_at, h.clock.now());
}

#[tokio::test]
async fn generated_ids_are_distinct() {
    let h = harness();
    let a = h.clients.create(&admin(), &new_client("A")).await.unwrap();
    let b = h.clients.create(&admin(), &new_client("B")).await.unwrap();
    assert_ne!(a, b);
}

#[tokio::test]
async fn empty_update_only_touches_updated_at() {
    let h = harness();
    let id = h.clients.create(&admin(), &new_client("Bruno")).await.unwrap();
    let before = h.clients.get(&id, &admin()).await.unwrap().unwrap();

    h.clock.advance_secs(3600);
    assert!(h.clients.update(&id, &admin(), &ClientUpdate::default()).await.unwrap());
    let after = h.clients.get(&id, &admin()).await.unwrap().unwrap();

    assert_eq!(after.updated_at, h.clock.now());
    assert_ne!(after.updated_at, before.updated_at);
    let mut expected = before.clone();
    expected.updated_at = after.updated_at;
    assert_eq!(after, expected);
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() {
    let h = harness();
    let id = h.clients.create(&admin(), &new_client("Bruno")).await.unwrap();

    let update = ClientUpdate {
        weight_kg: Some(82.5),
        goals: Some("Maintain".to_string()),
        ..Default::default()
    };
    h.clients.update(&id, &admin(), &update).await.unwrap();
    let client = h.clients.get(&id, &admin()).await.unwrap().unwrap();

    assert_eq!(client.weight_kg, 82.5);
    assert_eq!(client.goals, "Maintain");
    assert_eq!(client.name, "Bruno");
    assert_eq!(client.tdee, 3100);
}

#[tokio::test]
async fn missing_ids_are_not_found_rather_than_errors() {
    let h = harness();
    let client_id = ClientId::new("does-not-exist").unwrap();
    let session_id = SessionId::new("does-not-exist").unwrap();

    assert!(h.clients.get(&client_id, &admin()).await.unwrap().is_none());
    assert!(!h.clients.update(&client_id, &admin(), &ClientUpdate::default()).await.unwrap());
    assert!(!h.clients.delete(&client_id, &admin()).await.unwrap());

    assert!(h.sessions.get(&session_id, &admin()).await.unwrap().is_none());
    assert!(!h.sessions.update(&session_id, &admin(), &SessionUpdate::default()).await.unwrap());
    assert!(!h.sessions.delete(&session_id, &admin()).await.unwrap());
}

#[tokio::test]
async fn delete_removes_the_record_once() {
    let h = harness();
    let id = h.clients.create(&admin(), &new_client("Bruno")).await.unwrap();

    assert!(h.clients.delete(&id, &admin()).await.unwrap());
    assert!(h.clients.get(&id, &admin()).await.unwrap().is_none());
    assert!(!h.clients.delete(&id, &admin()).await.unwrap());
}

// ════════════════════════════════════════════════════════════════════════════
// Tenant isolation
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn tenants_never_see_each_others_records() {
    let h = harness();
    let other = TenantId::new("other-coach").unwrap();

    let mine = h.clients.create(&admin(), &new_client("Mine")).await.unwrap();
    let theirs = h.clients.create(&other, &new_client("Theirs")).await.unwrap();

    assert!(h.clients.get(&theirs, &admin()).await.unwrap().is_none());
    assert!(h.clients.get(&mine, &other).await.unwrap().is_none());

    let listed: Vec<String> = h
        .clients
        .list(&admin())
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(listed, vec!["Mine"]);

    assert!(!h.clients.update(&theirs, &admin(), &ClientUpdate::default()).await.unwrap());
    assert!(!h.clients.delete(&theirs, &admin()).await.unwrap());
    assert!(h.clients.get(&theirs, &other).await.unwrap().is_some());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let h = harness();
    for name in ["Carla", "Ana", "Bruno"] {
        h.clients.create(&admin(), &new_client(name)).await.unwrap();
    }
    let names: Vec<String> = h
        .clients
        .list(&admin())
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Carla", "Ana", "Bruno"]);
}

// ════════════════════════════════════════════════════════════════════════════
// Sessions
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn session_for_unknown_client_fails_and_persists_nothing() {
    let h = harness();
    let ghost = ClientId::new("ghost").unwrap();

    let err = h
        .sessions
        .create(&admin(), &new_session(&ghost, "2024-06-10", "09:00"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(h.sessions.list(&admin()).await.unwrap().is_empty());
}

#[tokio::test]
async fn session_for_another_tenants_client_is_rejected() {
    let h = harness();
    let other = TenantId::new("other-coach").unwrap();
    let client = h.clients.create(&other, &new_client("Theirs")).await.unwrap();

    let result = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-10", "09:00"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn list_by_date_sorts_by_time_and_keeps_ties_in_insertion_order() {
    let h = harness();
    let client = h.clients.create(&admin(), &new_client("Ana")).await.unwrap();

    let late_first = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-11", "10:00"))
        .await
        .unwrap();
    let early = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-11", "08:00"))
        .await
        .unwrap();
    let late_second = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-11", "10:00"))
        .await
        .unwrap();
    let middle = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-11", "09:15"))
        .await
        .unwrap();
    h.sessions
        .create(&admin(), &new_session(&client, "2024-06-12", "07:00"))
        .await
        .unwrap();

    let ids: Vec<SessionId> = h
        .sessions
        .list_by_date(&admin(), "2024-06-11".parse().unwrap())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(ids, vec![early, middle, late_first, late_second]);
}

#[tokio::test]
async fn list_today_uses_the_clock_date() {
    let h = harness();
    let client = h.clients.create(&admin(), &new_client("Ana")).await.unwrap();
    h.sessions
        .create(&admin(), &new_session(&client, "2024-06-10", "18:00"))
        .await
        .unwrap();
    h.sessions
        .create(&admin(), &new_session(&client, "2024-06-11", "18:00"))
        .await
        .unwrap();

    let today = h.sessions.list_today(&admin()).await.unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, "2024-06-10".parse().unwrap());
}

#[tokio::test]
async fn session_update_sets_status_and_time() {
    let h = harness();
    let client = h.clients.create(&admin(), &new_client("Ana")).await.unwrap();
    let id = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-10", "18:00"))
        .await
        .unwrap();

    let update = SessionUpdate {
        time: Some(SessionTime::from_hm(19, 30).unwrap()),
        status: Some(SessionStatus::Completed),
        notes: None,
    };
    assert!(h.sessions.update(&id, &admin(), &update).await.unwrap());

    let session = h.sessions.get(&id, &admin()).await.unwrap().unwrap();
    assert_eq!(session.time.to_string(), "19:30");
    assert_eq!(session.status, SessionStatus::Completed);
}

#[tokio::test]
async fn session_keeps_the_client_name_it_was_booked_with() {
    let h = harness();
    let client = h.clients.create(&admin(), &new_client("Ana")).await.unwrap();
    let session = h
        .sessions
        .create(&admin(), &new_session(&client, "2024-06-10", "07:30"))
        .await
        .unwrap();
    assert_eq!(
        h.sessions.get(&session, &admin()).await.unwrap().unwrap().client_name,
        "Ana"
    );

    let rename = ClientUpdate {
        name: Some("Ana Maria".to_string()),
        ..Default::default()
    };
    h.clients.update(&client, &admin(), &rename).await.unwrap();
    h.clients.delete(&client, &admin()).await.unwrap();

    let stored = h.sessions.get(&session, &admin()).await.unwrap().unwrap();
    assert_eq!(stored.client_name, "Ana");
    assert_eq!(stored.client_id, client);
}

// ════════════════════════════════════════════════════════════════════════════
// Plans
// ════════════════════════════════════════════════════════════════════════════

fn workout(exercise: &str) -> Workout {
    Workout {
        exercise: exercise.to_string(),
        sets: 4,
        reps: 8,
        rest_sec: 90,
        notes: String::new(),
    }
}

#[tokio::test]
async fn unwritten_week_is_seven_empty_days_and_is_not_stored() {
    let h = harness();
    let client = ClientId::new("c1").unwrap();

    let plan = h.plans.get_week_plan(&admin(), &client, 0).await.unwrap();

    assert_eq!(plan.client_id, client);
    assert_eq!(plan.week_start, "2024-06-10".parse().unwrap());
    let days: Vec<Weekday> = plan.days.iter().map(|d| d.day).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
    assert_eq!(plan.workout_count(), 0);
    assert!(h.plan_store.is_empty().await);
}

#[tokio::test]
async fn next_week_offset_moves_week_start_forward() {
    let h = harness();
    h.clock.advance_secs(3 * 86_400);
    let client = ClientId::new("c1").unwrap();

    let plan = h.plans.get_week_plan(&admin(), &client, 1).await.unwrap();
    assert_eq!(plan.week_start, "2024-06-17".parse().unwrap());
}

#[tokio::test]
async fn saved_plan_round_trips_and_later_saves_replace_it() {
    let h = harness();
    let client = ClientId::new("c1").unwrap();
    let mut plan = WeekPlan::empty(client.clone(), "2024-06-10".parse().unwrap());
    plan.days[0].workouts.push(workout("Squat"));
    plan.days[0].workouts.push(workout("Bench press"));
    plan.days[3].workouts.push(workout("Deadlift"));

    h.plans.save_week_plan(&admin(), &client, &plan).await.unwrap();
    assert_eq!(h.plans.get_week_plan(&admin(), &client, 0).await.unwrap(), plan);

    let mut replacement = WeekPlan::empty(client.clone(), plan.week_start);
    replacement.days[4].workouts.push(workout("Row"));
    h.plans.save_week_plan(&admin(), &client, &replacement).await.unwrap();

    let stored = h.plans.get_week_plan(&admin(), &client, 0).await.unwrap();
    assert_eq!(stored, replacement);
    assert_eq!(stored.workout_count(), 1);
    assert_eq!(h.plan_store.len().await, 1);
}

#[tokio::test]
async fn plans_are_scoped_by_tenant() {
    let h = harness();
    let client = ClientId::new("c1").unwrap();
    let mut plan = WeekPlan::empty(client.clone(), "2024-06-10".parse().unwrap());
    plan.days[1].workouts.push(workout("Lunge"));
    h.plans.save_week_plan(&admin(), &client, &plan).await.unwrap();

    let other = TenantId::new("other-coach").unwrap();
    let seen = h.plans.get_week_plan(&other, &client, 0).await.unwrap();
    assert_eq!(seen.workout_count(), 0);
}

#[tokio::test]
async fn saving_under_a_different_client_is_rejected() {
    let h = harness();
    let plan = WeekPlan::empty(ClientId::new("c1").unwrap(), "2024-06-10".parse().unwrap());

    let err = h
        .plans
        .save_week_plan(&admin(), &ClientId::new("c2").unwrap(), &plan)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::PlanKeyMismatch);
    assert!(h.plan_store.is_empty().await);
}

// ════════════════════════════════════════════════════════════════════════════
// Auth gate
// ════════════════════════════════════════════════════════════════════════════

fn gate(clock: Arc<FixedClock>) -> AuthGate {
    let tokens = JwtAccessTokens::new(
        JwtConfig::new("integration-test-secret", "coach-api", 8),
        clock,
    );
    AuthGate::new(
        AdminCredentials::new("coach", "s3cret-pass"),
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(tokens),
    )
    .with_hash_cost(4)
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let gate = gate(Arc::new(FixedClock::at(NOW).unwrap()));

    assert!(gate.authenticate("wrong", "wrong").await.unwrap().is_none());
    assert!(gate.authenticate("coach", "wrong").await.unwrap().is_none());
    assert!(gate.authenticate("wrong", "s3cret-pass").await.unwrap().is_none());
}

#[tokio::test]
async fn issued_tokens_verify_to_the_same_identity() {
    let gate = gate(Arc::new(FixedClock::at(NOW).unwrap()));

    let user = gate.authenticate("coach", "s3cret-pass").await.unwrap().unwrap();
    let token = gate.issue_token(&user).unwrap();

    assert_eq!(gate.verify_token(&token).unwrap(), AuthenticatedUser::new("coach"));
}

#[tokio::test]
async fn garbage_tokens_are_invalid() {
    let gate = gate(Arc::new(FixedClock::at(NOW).unwrap()));

    for token in ["garbage", "", "a.b.c", "Bearer x"] {
        assert_eq!(gate.verify_token(token), Err(AuthError::InvalidToken));
    }
}

#[tokio::test]
async fn tokens_stop_verifying_after_expiry() {
    let clock = Arc::new(FixedClock::at(NOW).unwrap());
    let gate = gate(clock.clone());
    let token = gate.issue_token(&AuthenticatedUser::new("coach")).unwrap();

    clock.advance_secs(9 * 86_400);
    assert_eq!(gate.verify_token(&token), Err(AuthError::TokenExpired));
}

#[tokio::test]
async fn registered_credentials_can_log_in() {
    let gate = gate(Arc::new(FixedClock::at(NOW).unwrap()));

    gate.register("assistant", "another-pass").await.unwrap();

    let user = gate.authenticate("assistant", "another-pass").await.unwrap();
    assert_eq!(user, Some(AuthenticatedUser::new("assistant")));
    assert!(gate.authenticate("assistant", "nope-nope").await.unwrap().is_none());
    assert!(gate.register("assistant", "another-pass").await.is_err());
}
