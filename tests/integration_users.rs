use reqwest::StatusCode;
use serde_json::{Value, json};

mod common;

#[tokio::test]
async fn test_full_lifecycle() {
    let app = common::TestApp::spawn().await;

    // Create
    let resp = app
        .client
        .put(app.user_url(1))
        .json(&json!({"username": "alice", "password": "p1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = resp.text().await.unwrap();
    assert_eq!(created, r#"{"id":1,"username":"alice","password":"p1"}"#);

    // Fetch returns the same body
    let resp = app.client.get(app.user_url(1)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), created);

    // Partial update changes only the password
    let resp = app.client.patch(app.user_url(1)).json(&json!({"password": "p2"})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"id": 1, "username": "alice", "password": "p2"}));

    // Delete
    let resp = app.client.delete(app.user_url(1)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.text().await.unwrap(), "");

    // Gone
    let resp = app.client.get(app.user_url(1)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_round_trips_field_values() {
    let app = common::TestApp::spawn().await;

    for (id, username, password) in [(2, "bob", "hunter2"), (10, "carol", "s3cret"), (42, "dave", "pw")] {
        let resp = app
            .client
            .put(app.user_url(id))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = app.client.get(app.user_url(id)).send().await.unwrap().json().await.unwrap();
        assert_eq!(body, json!({"id": id, "username": username, "password": password}));
    }
}

#[tokio::test]
async fn test_patch_username_leaves_password() {
    let app = common::TestApp::spawn().await;

    app.client
        .put(app.user_url(5))
        .json(&json!({"username": "erin", "password": "keepme"}))
        .send()
        .await
        .unwrap();

    let resp = app.client.patch(app.user_url(5)).json(&json!({"username": "frank"})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"id": 5, "username": "frank", "password": "keepme"}));
}

#[tokio::test]
async fn test_patch_empty_body_changes_nothing() {
    let app = common::TestApp::spawn().await;

    app.client
        .put(app.user_url(6))
        .json(&json!({"username": "grace", "password": "p1"}))
        .send()
        .await
        .unwrap();

    let resp = app.client.patch(app.user_url(6)).json(&json!({})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"id": 6, "username": "grace", "password": "p1"}));
}

#[tokio::test]
async fn test_list_users_ordered_by_id() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(app.users_url()).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    // Insert out of order; the list comes back sorted by id.
    for (id, username) in [(30, "zoe"), (12, "yan"), (21, "xia")] {
        app.client
            .put(app.user_url(id))
            .json(&json!({"username": username, "password": "pw"}))
            .send()
            .await
            .unwrap();
    }

    let body: Value = app.client.get(app.users_url()).send().await.unwrap().json().await.unwrap();
    assert_eq!(
        body,
        json!([
            {"id": 12, "username": "yan", "password": "pw"},
            {"id": 21, "username": "xia", "password": "pw"},
            {"id": 30, "username": "zoe", "password": "pw"}
        ])
    );
}

#[tokio::test]
async fn test_delete_one_of_many() {
    let app = common::TestApp::spawn().await;

    for id in [1, 2, 3] {
        app.client
            .put(app.user_url(id))
            .json(&json!({"username": format!("user{id}"), "password": "pw"}))
            .send()
            .await
            .unwrap();
    }

    let resp = app.client.delete(app.user_url(2)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body: Value = app.client.get(app.users_url()).send().await.unwrap().json().await.unwrap();
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|u| u["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3]);
}
