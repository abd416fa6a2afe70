pub mod admin_session;
pub mod elf_post;
pub mod kid;
pub mod settings;

/*
 Only one person ever logs in (the parent running the site), so sessions are
 not tied to a user row. Posts, kids and settings are plain records that the
 admin portal edits and the public feed reads once the reveal time passes.
 */
