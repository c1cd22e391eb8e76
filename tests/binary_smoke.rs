use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn run_with_stdin(dir: &std::path::Path, cfg: &std::path::Path, input: &str) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("file_manager");
    let mut child = Command::new(&me)
        .env("FILE_MANAGER_CONFIG", cfg)
        .arg("--dir")
        .arg(dir)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn empty_config(dir: &std::path::Path) -> std::path::PathBuf {
    let cfg = dir.join("config.xml");
    fs::write(&cfg, "<config>\n  <log_level>quiet</log_level>\n</config>\n").unwrap();
    cfg
}

#[test]
fn binary_print_config_succeeds() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    let me = assert_cmd::cargo::cargo_bin!("file_manager");
    let out = Command::new(&me)
        .env("FILE_MANAGER_CONFIG", &cfg)
        .arg("--print-config")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    assert!(String::from_utf8_lossy(&out.stdout).contains("config.xml"));
}

#[test]
fn binary_init_config_writes_template_once() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("nested").join("config.xml");
    let me = assert_cmd::cargo::cargo_bin!("file_manager");
    let out = Command::new(&me)
        .env("FILE_MANAGER_CONFIG", &cfg)
        .arg("--init-config")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(fs::read_to_string(&cfg).unwrap().contains("<work_dir>"));

    let again = Command::new(&me)
        .env("FILE_MANAGER_CONFIG", &cfg)
        .arg("--init-config")
        .output()
        .expect("spawn binary");
    assert!(!again.status.success(), "second init must not overwrite");
}

#[test]
fn invalid_choice_then_exit_is_status_zero() {
    let td = tempdir().unwrap();
    let cfg = empty_config(td.path());
    let out = run_with_stdin(td.path(), &cfg, "abc\n9\n");
    assert!(out.status.success());
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Invalid choice. Please enter a number between 1 and 9."));
    assert!(stdout.contains("Exiting..."));
}

#[test]
fn create_and_sort_through_the_binary() {
    let td = tempdir().unwrap();
    let cfg = empty_config(td.path());
    fs::write(td.path().join("big.bin"), vec![1u8; 300]).unwrap();
    let out = run_with_stdin(td.path(), &cfg, "1\nhello.txt\n8\n2\n9\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("File created successfully: hello.txt"));
    let big = stdout.find("big.bin - 300 bytes").expect("big.bin listed");
    let hello = stdout.find("hello.txt - 27 bytes").expect("hello.txt listed");
    assert!(big < hello, "descending order expected:\n{stdout}");
    assert_eq!(
        fs::read_to_string(td.path().join("hello.txt")).unwrap(),
        file_manager::GREETING
    );
}

#[test]
fn missing_work_dir_fails_fast() {
    let td = tempdir().unwrap();
    let cfg = empty_config(td.path());
    let me = assert_cmd::cargo::cargo_bin!("file_manager");
    let out = Command::new(&me)
        .env("FILE_MANAGER_CONFIG", &cfg)
        .arg("--dir")
        .arg(td.path().join("does-not-exist"))
        .stdin(Stdio::null())
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
}

#[cfg(unix)]
#[test]
fn interrupt_at_filename_prompt_exits_without_deleting() {
    use std::io::Read;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::{Duration, Instant};

    let td = tempdir().unwrap();
    let cfg = empty_config(td.path());
    let victim = td.path().join("victim");
    fs::write(&victim, b"keep").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("file_manager");
    let mut child = Command::new(&me)
        .env("FILE_MANAGER_CONFIG", &cfg)
        .arg("--dir")
        .arg(td.path())
        .current_dir(td.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn binary");

    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut stdout = child.stdout.take().expect("stdout");
    let reader = {
        let seen = Arc::clone(&seen);
        thread::spawn(move || {
            let mut buf = [0u8; 256];
            while let Ok(n) = stdout.read(&mut buf) {
                if n == 0 {
                    break;
                }
                seen.lock().unwrap().extend_from_slice(&buf[..n]);
            }
        })
    };

    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(b"3\n").unwrap();
    stdin.flush().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let shown = String::from_utf8_lossy(&seen.lock().unwrap()).into_owned();
        if shown.contains("Enter filename to delete: ") {
            break;
        }
        assert!(Instant::now() < deadline, "prompt never shown: {shown}");
        thread::sleep(Duration::from_millis(20));
    }

    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0);
    thread::sleep(Duration::from_millis(300));
    // The process should already be gone; a failed write is expected.
    let _ = stdin.write_all(b"victim\n");
    drop(stdin);

    let status = child.wait().expect("wait for binary");
    reader.join().unwrap();
    let shown = String::from_utf8_lossy(&seen.lock().unwrap()).into_owned();

    assert_eq!(status.code(), Some(130));
    assert!(victim.exists(), "file was deleted after the interrupt");
    assert!(!shown.contains("File deleted successfully"), "stdout: {shown}");
}
