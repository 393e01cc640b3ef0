//! Rendering through the fixture store.

use crate::support::*;

#[test]
fn test_docker_is_default() {
    let t = Test::with_parameters(DB_PARAMS);

    let output = t.cmd().args(["-p", "/app"]).output().unwrap();
    assert_success(&output);
    assert_stdout_eq(&output, "DB_HOST=10.0.0.1\nDB_PORT=5432\n");
}

#[test]
fn test_exports() {
    let t = Test::with_parameters(DB_PARAMS);

    let output = t.render("/app", "exports");
    assert_success(&output);
    assert_stdout_eq(&output, "export DB_HOST=10.0.0.1\nexport DB_PORT=5432\n");
}

#[test]
fn test_elasticbeanstalk() {
    let t = Test::with_parameters(DB_PARAMS);

    let output = t.render("/app", "elasticbeanstalk");
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "option_settings\n - option_name: DB_HOST\n   value: \"10.0.0.1\"\n - option_name: DB_PORT\n   value: \"5432\"\n",
    );
}

#[test]
fn test_output_from_env_var() {
    let t = Test::with_parameters(DB_PARAMS);

    let output = t
        .cmd()
        .env("SSM_ENV_PATH", "/app")
        .env("SSM_ENV_OUTPUT", "exports")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).starts_with("export DB_HOST="));
}

#[test]
fn test_empty_path_result() {
    let t = Test::with_parameters(DB_PARAMS);

    let output = t.render("/nothing/here", "docker");
    assert_success(&output);
    assert_stdout_eq(&output, "");

    let output = t.render("/nothing/here", "elasticbeanstalk");
    assert_success(&output);
    assert_stdout_eq(&output, "option_settings\n");
}

#[test]
fn test_one_level_unless_recursive() {
    let t = Test::with_parameters(TREE_PARAMS);

    let output = t.render("/svc/prod", "docker");
    assert_success(&output);
    assert_stdout_eq(&output, "API_URL=https://api.example.com\nJWT_SECRET=s3cr3t\n");

    let output = t.cmd().args(["-p", "/svc/prod", "-r"]).output().unwrap();
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "API_URL=https://api.example.com\nCONCURRENCY=8\nJWT_SECRET=s3cr3t\n",
    );
}

#[test]
fn test_values_are_verbatim() {
    let t = Test::with_parameters(AWKWARD_PARAMS);

    let output = t.render("/app", "docker");
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "QUOTED=say \"hi\"\nSPACED=two words\nDOLLAR=$HOME/bin\nEQUALS=a=b=c\nEMPTY=\n",
    );

    let output = t.render("/app", "elasticbeanstalk");
    assert_success(&output);
    assert!(stdout(&output).contains("   value: \"say \"hi\"\"\n"));
}

#[test]
fn test_store_order_is_kept_across_pages() {
    // More than one fixture page; names deliberately unsorted.
    let params: Vec<(String, String)> = (0..23)
        .rev()
        .map(|i| (format!("/big/VAR_{:02}", i), i.to_string()))
        .collect();
    let borrowed: Vec<(&str, &str)> = params
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    let t = Test::with_parameters(&borrowed);

    let output = t.render("/big", "exports");
    assert_success(&output);

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 23);
    assert_eq!(lines[0], "export VAR_22=22");
    assert_eq!(lines[22], "export VAR_00=0");
}

#[test]
fn test_stdout_is_stable_across_runs() {
    let t = Test::with_parameters(TREE_PARAMS);

    let first = t.render("/svc/prod", "elasticbeanstalk");
    let second = t.render("/svc/prod", "elasticbeanstalk");
    assert_success(&first);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_secure_values_decrypted_by_default() {
    let t = Test::with_secure_parameters(SECURE_PARAMS);

    let output = t.render("/app", "docker");
    assert_success(&output);
    assert_stdout_eq(&output, "DB_PASSWORD=hunter2\nAPI_TOKEN=tok_live_123\n");
}

#[test]
fn test_no_decrypt_leaves_ciphertext() {
    let t = Test::with_secure_parameters(SECURE_PARAMS);

    let output = t
        .cmd()
        .args(["-p", "/app", "-o", "exports", "--no-decrypt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "export DB_PASSWORD=AQICAHhpassword\nexport API_TOKEN=AQICAHhtoken\n",
    );
}
