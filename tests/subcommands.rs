//! Subcommand composition and validation.

mod common;

use lftp_wrapper::*;

fn last(ftp: &Lftp) -> &str {
    ftp.queued().last().expect("nothing queued")
}

/// Assert the call fails and leaves the queue exactly as it was.
fn assert_rejected<F>(f: F)
where
    F: FnOnce(&mut Lftp) -> Result<&mut Lftp, CommandError>,
{
    let mut ftp = common::lftp();
    ftp.pwd().unwrap();
    let before = ftp.queued().to_vec();
    assert!(f(&mut ftp).is_err());
    assert_eq!(ftp.queued(), before.as_slice());
}

// =============================================================================
// REQUIRED ARGUMENTS
// =============================================================================

#[test]
fn missing_required_arguments_leave_queue_unchanged() {
    assert_rejected(|f| f.at("", None));
    assert_rejected(|f| f.attach(""));
    assert_rejected(|f| f.cat(""));
    assert_rejected(|f| f.cd(""));
    assert_rejected(|f| f.lcd(""));
    assert_rejected(|f| f.local("", &[]));
    assert_rejected(|f| f.chmod("", &["a"], ChmodOptions::default()));
    assert_rejected(|f| f.chmod("755", &[], ChmodOptions::default()));
    assert_rejected(|f| f.edit("", EditOptions::default()));
    assert_rejected(|f| f.eval(&[], EvalOptions::default()));
    assert_rejected(|f| f.get("", GetOptions::default()));
    assert_rejected(|f| f.get1("", Get1Options::default()));
    assert_rejected(|f| f.glob(&[], GlobOptions::default()));
    assert_rejected(|f| f.ln("", "b", LnOptions::default()));
    assert_rejected(|f| f.ln("a", "", LnOptions::default()));
    assert_rejected(|f| f.mirror("", MirrorOptions::default()));
    assert_rejected(|f| f.mv("", "b"));
    assert_rejected(|f| f.mv("a", ""));
    assert_rejected(|f| f.pget("", PgetOptions::default()));
    assert_rejected(|f| f.put("", PutOptions::default()));
    assert_rejected(|f| f.rm(&[], RmOptions::default()));
    assert_rejected(|f| f.rmdir(&[], RmdirOptions::default()));
    assert_rejected(|f| f.mkdir(&[], MkdirOptions::default()));
    assert_rejected(|f| f.mrm(&[]));
    assert_rejected(|f| f.mget(&[], MultiTransferOptions::default()));
    assert_rejected(|f| f.mput(&[], MultiTransferOptions::default()));
    assert_rejected(|f| f.raw(""));
    assert_rejected(|f| f.set("", "x"));
    assert_rejected(|f| f.echo("", EchoOptions::default()));
    assert_rejected(|f| {
        f.bookmark(BookmarkCommand::Add {
            name: String::new(),
            location: None,
        })
    });
    assert_rejected(|f| f.bookmark(BookmarkCommand::Del { name: String::new() }));
    assert_rejected(|f| f.bookmark(BookmarkCommand::Import { kind: String::new() }));
}

#[test]
fn error_names_command_and_argument() {
    let mut ftp = common::lftp();
    let err = ftp.get("", GetOptions::default()).unwrap_err();
    assert_eq!(
        err,
        CommandError::MissingArgument {
            command: "get",
            argument: "remote_path"
        }
    );
    assert_eq!(err.to_string(), "get: missing required argument 'remote_path'");
}

#[test]
fn failure_stops_the_chain() {
    fn chain(ftp: &mut Lftp) -> Result<(), CommandError> {
        ftp.cd("dir")?.get("", GetOptions::default())?.pwd()?;
        Ok(())
    }
    let mut ftp = common::lftp();
    assert!(chain(&mut ftp).is_err());
    assert_eq!(ftp.queued(), ["cd dir"]);
}

// =============================================================================
// TRANSFER
// =============================================================================

#[test]
fn get_with_continue() {
    let mut ftp = common::lftp();
    ftp.get(
        "remoteDir/file.ext",
        GetOptions {
            continue_transfer: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(ftp.queued(), ["get -c remoteDir/file.ext"]);
}

#[test]
fn get_all_flags_in_order() {
    let mut ftp = common::lftp();
    ftp.get(
        "remote file",
        GetOptions {
            continue_transfer: true,
            delete_source: true,
            delete_target: true,
            ascii: true,
            base_dir: Some("base".into()),
            local_path: Some("local file".into()),
        },
    )
    .unwrap();
    assert_eq!(last(&ftp), r"get -c -E -e -a -O base remote\ file -o local\ file");
}

#[test]
fn get1_flags_in_order() {
    let mut ftp = common::lftp();
    ftp.get1(
        "big.iso",
        Get1Options {
            destination: Some("out.iso".into()),
            continue_transfer: true,
            delete_source: false,
            ascii: true,
            source_region: Some("0-1024".into()),
            target_position: Some(512),
        },
    )
    .unwrap();
    assert_eq!(
        last(&ftp),
        "get1 -o out.iso -c -a --source-region=0-1024 --target-position=512 big.iso"
    );
}

#[test]
fn put_with_remote_path() {
    let mut ftp = common::lftp();
    ftp.put(
        "local.txt",
        PutOptions {
            remote_path: Some("remote dir/r.txt".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(last(&ftp), r"put local.txt -o remote\ dir/r.txt");
}

#[test]
fn pget_defaults_to_four_connections() {
    let mut ftp = common::lftp();
    ftp.pget("file.bin", PgetOptions::default()).unwrap();
    assert_eq!(last(&ftp), "pget -n 4 file.bin");

    ftp.pget(
        "file.bin",
        PgetOptions {
            connections: Some(8),
            local_path: Some("out.bin".into()),
            queue: true,
        },
    )
    .unwrap();
    assert_eq!(last(&ftp), "queue pget -n 8 file.bin -o out.bin");
}

#[test]
fn mirror_upload_requires_local_dir() {
    let mut ftp = common::lftp();
    let err = ftp
        .mirror(
            "remoteDir",
            MirrorOptions {
                upload: true,
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CommandError::MissingArgument {
            command: "mirror",
            argument: "local_dir"
        }
    ));
    assert!(ftp.queued().is_empty());

    ftp.mirror(
        "remoteDir",
        MirrorOptions {
            upload: true,
            local_dir: Some("localDir".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(ftp.queued(), ["mirror --reverse localDir remoteDir"]);
}

#[test]
fn mirror_download_with_options() {
    let mut ftp = common::lftp();
    ftp.mirror(
        "remote",
        MirrorOptions {
            local_dir: Some("local".into()),
            parallel: Some(3),
            filter: Some(r"\.mkv$".into()),
            pget_n: Some(2),
            options: Some("--only-newer --verbose".into()),
            queue: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        last(&ftp),
        r"queue mirror --parallel=3 --include='\.mkv$' --use-pget-n=2 --only-newer --verbose remote local"
    );
}

#[test]
fn mirror_remote_only() {
    let mut ftp = common::lftp();
    ftp.mirror("remote", MirrorOptions::default()).unwrap();
    assert_eq!(last(&ftp), "mirror remote");
}

#[test]
fn mirror_rejects_quote_in_filter() {
    assert_rejected(|f| {
        f.mirror(
            "remote",
            MirrorOptions {
                filter: Some("it's".into()),
                ..Default::default()
            },
        )
    });
}

#[test]
fn mget_and_mput() {
    let mut ftp = common::lftp();
    ftp.mget(
        &["*.log", "*.txt"],
        MultiTransferOptions {
            continue_transfer: true,
            base_dir: Some("logs".into()),
            ..Default::default()
        },
    )
    .unwrap()
    .mput(&["out/*"], MultiTransferOptions::default())
    .unwrap();
    assert_eq!(ftp.queued(), ["mget -c -O logs *.log *.txt", "mput out/*"]);
}

// =============================================================================
// NAVIGATION AND FILES
// =============================================================================

#[test]
fn navigation_commands() {
    let mut ftp = common::lftp();
    ftp.cd("my dir")
        .unwrap()
        .lcd("/tmp")
        .unwrap()
        .pwd()
        .unwrap()
        .lpwd()
        .unwrap()
        .ls(None)
        .unwrap()
        .ls(Some("sub"))
        .unwrap()
        .cat("notes.txt")
        .unwrap();
    assert_eq!(
        ftp.queued(),
        [r"cd my\ dir", "lcd /tmp", "pwd", "lpwd", "ls", "ls sub", "cat notes.txt"]
    );
}

#[test]
fn cls_flags() {
    let mut ftp = common::lftp();
    ftp.cls(ClsOptions::default()).unwrap();
    ftp.cls(ClsOptions {
        single_column: true,
        dirs_first: true,
        path: Some("dir".into()),
    })
    .unwrap();
    assert_eq!(ftp.queued(), ["cls", "cls -1 -D dir"]);
}

#[test]
fn find_flags() {
    let mut ftp = common::lftp();
    ftp.find(FindOptions::default()).unwrap();
    ftp.find(FindOptions {
        max_depth: Some(2),
        long: true,
        directory: Some("src".into()),
    })
    .unwrap();
    assert_eq!(ftp.queued(), ["find", "find -d 2 -l src"]);
}

#[test]
fn file_management() {
    let mut ftp = common::lftp();
    ftp.chmod("755", &["a.sh", "b c.sh"], ChmodOptions::default())
        .unwrap()
        .chmod(
            "u+x",
            &["dir"],
            ChmodOptions {
                recursive: true,
                ..Default::default()
            },
        )
        .unwrap()
        .ln("target", "link", LnOptions { symbolic: true })
        .unwrap()
        .mv("old", "new")
        .unwrap()
        .rm(&["a", "b"], RmOptions::default())
        .unwrap()
        .rm(
            &["tree"],
            RmOptions {
                recursive: true,
                force: true,
            },
        )
        .unwrap()
        .rmdir(&["empty"], RmdirOptions::default())
        .unwrap()
        .mkdir(&["x/y"], MkdirOptions { parents: true })
        .unwrap()
        .mrm(&["*.tmp"])
        .unwrap();
    assert_eq!(
        ftp.queued(),
        [
            r"chmod 755 a.sh b\ c.sh",
            "chmod -R u+x dir",
            "ln -s target link",
            "mv old new",
            "rm a b",
            "rm -r -f tree",
            "rmdir empty",
            "mkdir -p x/y",
            "mrm *.tmp",
        ]
    );
}

#[test]
fn edit_flags() {
    let mut ftp = common::lftp();
    ftp.edit(
        "conf.ini",
        EditOptions {
            keep: true,
            output_dir: Some("/tmp".into()),
        },
    )
    .unwrap();
    assert_eq!(last(&ftp), "edit -k -o /tmp conf.ini");
}

// =============================================================================
// JOBS AND SCRIPTING
// =============================================================================

#[test]
fn jobs_verbosity() {
    let mut ftp = common::lftp();
    ftp.jobs(JobsOptions {
        verbosity: 2,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(last(&ftp), "jobs -vv");

    ftp.jobs(JobsOptions {
        verbosity: 4,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(last(&ftp), "jobs");

    ftp.jobs(JobsOptions {
        verbosity: 1,
        no_recursion: true,
        job: Some(3),
    })
    .unwrap();
    assert_eq!(last(&ftp), "jobs -v -r 3");
}

#[test]
fn wait_fg_kill() {
    let mut ftp = common::lftp();
    ftp.wait(JobTarget::Job(1))
        .unwrap()
        .fg(JobTarget::All)
        .unwrap()
        .kill("2".parse().unwrap())
        .unwrap();
    assert_eq!(ftp.queued(), ["wait 1", "wait all", "kill 2"]);
}

#[test]
fn exit_modes() {
    let mut ftp = common::lftp();
    ftp.exit(ExitMode::Bg).unwrap();
    ftp.exit("top".parse().unwrap()).unwrap();
    ftp.exit(ExitMode::Kill(Some(2))).unwrap();
    ftp.exit(ExitMode::Kill(None)).unwrap();
    assert_eq!(ftp.queued(), ["exit bg", "exit top", "exit kill 2", "exit kill"]);
}

#[test]
fn at_attach_sleep() {
    let mut ftp = common::lftp();
    ftp.at("23:00", None).unwrap();
    ftp.at("now + 1 hour", Some("mirror remote")).unwrap();
    ftp.attach("4242").unwrap();
    ftp.sleep(5).unwrap();
    assert_eq!(
        ftp.queued(),
        [
            "at 23:00",
            r"at now\ +\ 1\ hour -- mirror remote",
            "attach 4242",
            "sleep 5"
        ]
    );
}

#[test]
fn attach_rejects_non_numeric_pid() {
    assert_rejected(|f| f.attach("12a"));
}

#[test]
fn debug_flags_in_order() {
    let mut ftp = common::lftp();
    ftp.debug(
        DebugLevel::Level(9),
        DebugOptions {
            truncate: true,
            output_file: Some("debug.log".into()),
            context: true,
            pid: true,
            timestamps: true,
        },
    )
    .unwrap();
    ftp.debug("off".parse().unwrap(), DebugOptions::default())
        .unwrap();
    assert_eq!(
        ftp.queued(),
        ["debug -T -o debug.log -c -p -t 9", "debug off"]
    );
}

#[test]
fn glob_shapes() {
    let mut ftp = common::lftp();
    ftp.glob(
        &["*.txt"],
        GlobOptions {
            exist: true,
            command: Some("echo found".into()),
            ..Default::default()
        },
    )
    .unwrap();
    ftp.glob(
        &["*.bak"],
        GlobOptions {
            not_exist: true,
            ..Default::default()
        },
    )
    .unwrap();
    ftp.glob(
        &["*.log", "*.old"],
        GlobOptions {
            files_only: true,
            command: Some("rm".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        ftp.queued(),
        [
            "glob --exist *.txt && echo found",
            "glob --not-exist *.bak",
            "glob -f rm *.log *.old",
        ]
    );
}

#[test]
fn glob_requires_a_mode() {
    assert_rejected(|f| f.glob(&["*"], GlobOptions::default()));
    assert_rejected(|f| {
        f.glob(
            &["*"],
            GlobOptions {
                exist: true,
                not_exist: true,
                ..Default::default()
            },
        )
    });
}

#[test]
fn eval_echo_local() {
    let mut ftp = common::lftp();
    ftp.eval(
        &["a", "b"],
        EvalOptions {
            format: Some("cd".into()),
        },
    )
    .unwrap()
    .echo("hello world", EchoOptions { no_newline: true })
    .unwrap()
    .local("ls", &["-la"])
    .unwrap();
    assert_eq!(
        ftp.queued(),
        ["eval -f cd a b", r"echo -n hello\ world", "local ls -la"]
    );
}

#[test]
fn command_and_queue_wrap_inner_builder() {
    let mut ftp = common::lftp();
    ftp.command(|f| f.get("file.txt", GetOptions::default()))
        .unwrap()
        .queue(|f| f.mirror("remote", MirrorOptions::default()))
        .unwrap();
    assert_eq!(ftp.queued(), ["command get file.txt", "queue mirror remote"]);
}

#[test]
fn command_propagates_inner_failure() {
    assert_rejected(|f| f.command(|f| f.get("", GetOptions::default())));
}

// =============================================================================
// CONNECTION, BOOKMARK, CACHE
// =============================================================================

#[test]
fn connection_control() {
    let mut ftp = common::lftp();
    ftp.raw("user bob")
        .unwrap()
        .set("ftp:passive-mode", "on")
        .unwrap()
        .close(CloseOptions { all: true })
        .unwrap()
        .close(CloseOptions::default())
        .unwrap();
    assert_eq!(
        ftp.queued(),
        ["user bob", "set ftp:passive-mode on", "close -a", "close"]
    );
}

#[test]
fn bookmark_subcommands() {
    let mut ftp = common::lftp();
    ftp.bookmark(BookmarkCommand::Add {
        name: "home".into(),
        location: Some("sftp://host/dir".into()),
    })
    .unwrap()
    .bookmark(BookmarkCommand::Add {
        name: "here".into(),
        location: None,
    })
    .unwrap()
    .bookmark(BookmarkCommand::Del { name: "home".into() })
    .unwrap()
    .bookmark(BookmarkCommand::Edit)
    .unwrap()
    .bookmark(BookmarkCommand::Import {
        kind: "ncftp".into(),
    })
    .unwrap()
    .bookmark(BookmarkCommand::List)
    .unwrap();
    assert_eq!(
        ftp.queued(),
        [
            "bookmark add home sftp://host/dir",
            "bookmark add here",
            "bookmark del home",
            "bookmark edit",
            "bookmark import ncftp",
            "bookmark list",
        ]
    );
}

#[test]
fn cache_subcommands() {
    let mut ftp = common::lftp();
    for cmd in [
        CacheCommand::Stat,
        CacheCommand::On,
        CacheCommand::Off,
        CacheCommand::Flush,
        CacheCommand::Size(-1),
        CacheCommand::Expire {
            amount: 5,
            unit: "m".parse().unwrap(),
        },
    ] {
        ftp.cache(cmd).unwrap();
    }
    assert_eq!(
        ftp.queued(),
        [
            "cache stat",
            "cache on",
            "cache off",
            "cache flush",
            "cache size -1",
            "cache expire 5m",
        ]
    );
    assert!("w".parse::<ExpireUnit>().is_err());
}

// =============================================================================
// ESCAPE MODE
// =============================================================================

#[test]
fn disabled_escape_embeds_paths_verbatim() {
    let mut ftp = common::lftp_unescaped();
    ftp.get("[test] file.mkv", GetOptions::default()).unwrap();
    assert_eq!(last(&ftp), "get [test] file.mkv");
}

#[test]
fn enabled_escape_protects_paths() {
    let mut ftp = common::lftp();
    ftp.get("[test] file.mkv", GetOptions::default()).unwrap();
    assert_eq!(last(&ftp), r"get \[test\]\ file.mkv");
}
