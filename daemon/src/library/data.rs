//! Bundled alias table from the GitAlias project.
//!
//! Shell-function aliases (`!f() { ... }`) are left out; every entry here
//! is a plain git command line.

use super::LibraryAlias;

const fn alias(
    name: &'static str,
    command: &'static str,
    category: &'static str,
    description: &'static str,
) -> LibraryAlias {
    LibraryAlias {
        name,
        command,
        category,
        description,
    }
}

#[rustfmt::skip]
pub(super) static LIBRARY: &[LibraryAlias] = &[
    // Short aliases
    alias("a", "add", "short", "add"),
    alias("b", "branch", "short", "branch"),
    alias("c", "commit", "short", "commit"),
    alias("d", "diff", "short", "diff"),
    alias("f", "fetch", "short", "fetch"),
    alias("g", "grep", "short", "grep"),
    alias("l", "log", "short", "log"),
    alias("m", "merge", "short", "merge"),
    alias("o", "checkout", "short", "checkout"),
    alias("p", "pull", "short", "pull"),
    alias("s", "status", "short", "status"),
    alias("w", "whatchanged", "short", "whatchanged"),
    // Add aliases
    alias("aa", "add --all", "add", "add all"),
    alias("ap", "add --patch", "add", "add by patch"),
    alias("au", "add --update", "add", "add just the files that are updated"),
    // Branch aliases
    alias("bm", "branch --merged", "branch", "branch and only list branches whose tips are reachable from the specified commit"),
    alias("bnm", "branch --no-merged", "branch", "branch and only list branches whose tips are not reachable from the specified commit"),
    alias("bed", "branch --edit-description", "branch", "branch with edit description"),
    alias("bv", "branch --verbose", "branch", "branch verbose"),
    alias("bvv", "branch --verbose --verbose", "branch", "branch verbose verbose"),
    // Commit aliases
    alias("ca", "commit --amend", "commit", "commit - amend the tip of the current branch"),
    alias("cam", "commit --amend --message", "commit", "commit - amend the tip and edit the message"),
    alias("cane", "commit --amend --no-edit", "commit", "commit - amend the tip, do not edit the message"),
    alias("caa", "commit --amend --all", "commit", "commit - amend the tip, staging all files"),
    alias("caam", "commit --amend --all --message", "commit", "commit - amend the tip, staging files, edit message"),
    alias("caane", "commit --amend --all --no-edit", "commit", "commit - amend the tip, staging files, no edit"),
    alias("ci", "commit --interactive", "commit", "commit interactive"),
    alias("cm", "commit --message", "commit", "commit with a message"),
    // Checkout aliases
    alias("co", "checkout", "checkout", "checkout - update working tree to match a branch or paths"),
    alias("cong", "checkout --no-guess", "checkout", "checkout with no guess"),
    alias("cob", "checkout -b", "checkout", "create a new branch and switch to it"),
    // Cherry-pick aliases
    alias("cp", "cherry-pick", "cherry-pick", "cherry-pick - apply changes from existing commits"),
    alias("cpa", "cherry-pick --abort", "cherry-pick", "cherry-pick abort"),
    alias("cpc", "cherry-pick --continue", "cherry-pick", "cherry-pick continue"),
    alias("cpn", "cherry-pick --no-commit", "cherry-pick", "cherry-pick without making a commit"),
    alias("cpnx", "cherry-pick --no-commit -x", "cherry-pick", "cherry-pick without commit, append cherry picked from line"),
    // Diff aliases
    alias("dc", "diff --cached", "diff", "show changes not yet staged"),
    alias("ds", "diff --staged", "diff", "show changes about to be committed"),
    alias("dw", "diff --word-diff", "diff", "show changes by word, not line"),
    alias("dd", "diff-deep", "diff", "show changes with preferred options"),
    // Fetch aliases
    alias("fa", "fetch --all", "fetch", "fetch all remotes"),
    alias("fav", "fetch --all --verbose", "fetch", "fetch all remotes with verbose output"),
    alias("fap", "fetch --all --prune", "fetch", "fetch all remotes and delete stale references"),
    // Grep aliases
    alias("gn", "grep --line-number", "grep", "grep with line number"),
    alias("gg", "grep-group", "grep", "search with preferred options"),
    // Log aliases
    alias("lg", "log --graph", "log", "log with graphical representation"),
    alias("lo", "log --oneline", "log", "log with one line per item"),
    alias("lor", "log --oneline --reverse", "log", "log one line per item, reverse order"),
    alias("lp", "log --patch", "log", "log with patch generation"),
    alias("lfp", "log --first-parent", "log", "log with first parent"),
    alias("lto", "log --topo-order", "log", "log in topological order"),
    alias("ll", "log-list", "log", "log list with preferred information"),
    alias("lll", "log-list-long", "log", "log list with long information"),
    // Ls-files aliases
    alias("ls", "ls-files", "ls-files", "show information about files in index and working tree"),
    alias("lsd", "ls-files --debug", "ls-files", "list files with debug information"),
    alias("lsfn", "ls-files --full-name", "ls-files", "list files with full name"),
    alias("lsio", "ls-files --ignored --others --exclude-standard", "ls-files", "list files that git has ignored"),
    // Merge aliases
    alias("ma", "merge --abort", "merge", "merge abort"),
    alias("mc", "merge --continue", "merge", "merge continue"),
    alias("mncnf", "merge --no-commit --no-ff", "merge", "merge without autocommit and with a commit even if fast-forward"),
    // Pull aliases
    alias("pf", "pull --ff-only", "pull", "pull if fast-forward possible, otherwise fail"),
    alias("pr", "pull --rebase", "pull", "pull with rebase for cleaner history"),
    alias("prp", "pull --rebase=preserve", "pull", "pull with rebase preserve of merge commits"),
    // Rebase aliases
    alias("rb", "rebase", "rebase", "rebase - forward-port local commits"),
    alias("rba", "rebase --abort", "rebase", "rebase abort"),
    alias("rbc", "rebase --continue", "rebase", "rebase continue after resolving conflict"),
    alias("rbs", "rebase --skip", "rebase", "rebase skip current patch"),
    alias("rbi", "rebase --interactive", "rebase", "rebase interactive with prompts"),
    alias("rbiu", "rebase --interactive @{upstream}", "rebase", "rebase interactive on unpushed commits"),
    // Reflog aliases
    alias("rl", "reflog", "reflog", "reference log"),
    // Remote aliases
    alias("rr", "remote", "remote", "remote - manage tracked repositories"),
    alias("rrs", "remote show", "remote", "remote show"),
    alias("rru", "remote update", "remote", "remote update"),
    alias("rrp", "remote prune", "remote", "remote prune stale branches"),
    // Revert aliases
    alias("rv", "revert", "revert", "revert - undo changes from existing commits"),
    alias("rvnc", "revert --no-commit", "revert", "revert without autocommit"),
    // Show-branch aliases
    alias("sb", "show-branch", "show-branch", "print a list of branches and their commits"),
    // Submodule aliases
    alias("sm", "submodule", "submodule", "submodule"),
    alias("smi", "submodule init", "submodule", "submodule init"),
    alias("sma", "submodule add", "submodule", "submodule add"),
    alias("sms", "submodule sync", "submodule", "submodule sync"),
    alias("smu", "submodule update", "submodule", "submodule update"),
    alias("smui", "submodule update --init", "submodule", "submodule update with initialize"),
    alias("smuir", "submodule update --init --recursive", "submodule", "submodule update with init and recursive"),
    // Status aliases
    alias("ss", "status --short", "status", "status with short format"),
    alias("ssb", "status --short --branch", "status", "status short with branch and tracking info"),
    // Diff-* aliases
    alias("diff-changes", "diff --name-status -r", "diff", "diff changes"),
    alias("diff-stat", "diff --stat --ignore-space-change -r", "diff", "diff stat"),
    alias("diff-staged", "diff --cached", "diff", "diff staged files"),
    alias("diff-deep", "diff --check --dirstat --find-copies --find-renames --histogram --color", "diff", "diff with thorough options"),
    // Grep-* aliases
    alias("grep-group", "grep --break --heading --line-number --color", "grep", "find text with grouped output"),
    // Misc aliases
    alias("last-tag", "describe --tags --abbrev=0", "tag", "last tag in current branch"),
    alias("orphans", "fsck --full", "maintenance", "find all unreferenced objects (orphans)"),
    // Log-* aliases
    alias("log-fresh", "log ORIG_HEAD.. --stat --no-merges", "log", "show log of new commits after fetch"),
    alias("log-list", "log --graph --topo-order --date=short --abbrev-commit --decorate --all --boundary --pretty=format:'%Cblue%ad %C(auto)%h%Creset -%C(auto)%d%Creset %s %Cblue[%aN]%Creset %Cblue%G?%Creset'", "log", "log list with preferred information"),
    alias("log-list-long", "log --graph --topo-order --date=iso8601-strict --no-abbrev-commit --decorate --all --boundary --pretty=format:'%Cblue%ad %C(auto)%h%Creset -%C(auto)%d%Creset %s %Cblue[%aN <%aE>]%Creset %Cblue%G?%Creset'", "log", "log list with long formats"),
    alias("log-graph", "log --graph --all --oneline --decorate", "log", "show log as a graph"),
    alias("log-date-last", "log -1 --date-order --format=%cI", "log", "show date of last commit"),
    alias("log-1-hour", "log --since=1-hour-ago", "log", "log since 1 hour ago"),
    alias("log-1-day", "log --since=1-day-ago", "log", "log since 1 day ago"),
    alias("log-1-week", "log --since=1-week-ago", "log", "log since 1 week ago"),
    alias("log-1-month", "log --since=1-month-ago", "log", "log since 1 month ago"),
    alias("log-1-year", "log --since=1-year-ago", "log", "log since 1 year ago"),
    alias("log-refs", "log --all --graph --decorate --oneline --simplify-by-decoration --no-merges", "log", "log refs"),
    alias("log-timeline", "log --format='%h %an %ar - %s'", "log", "log timeline"),
    alias("log-local", "log --oneline origin..HEAD", "log", "log local commits"),
    alias("log-fetched", "log --oneline HEAD..origin/main", "log", "log fetched commits"),
    // Lookup aliases
    alias("whatis", "show --no-patch --pretty='tformat:%h (%s, %ad)' --date=short", "lookup", "given any git object, show it briefly"),
    alias("who", "shortlog --summary --numbered --no-merges", "lookup", "show who contributed by number of commits"),
    // Workflow aliases
    alias("initer", "init-empty", "workflow", "init a repo with empty rebaseable commit"),
    alias("cloner", "clone --recursive", "workflow", "clone with recursive submodules"),
    alias("clone-lean", "clone --depth 1 --filter=combine:blob:none+tree:0 --no-checkout", "workflow", "clone as lean as possible"),
    alias("pushy", "push --force-with-lease", "workflow", "push with force and lease safety check"),
    // Reset & Undo aliases
    alias("reset-commit", "reset --soft HEAD~1", "reset", "reset commit (soft)"),
    alias("reset-commit-hard", "reset --hard HEAD~1", "reset", "reset commit (hard)"),
    alias("undo-commit", "reset --soft HEAD~1", "undo", "undo commit (soft)"),
    alias("undo-commit-hard", "reset --hard HEAD~1", "undo", "undo commit (hard)"),
    alias("uncommit", "reset --soft HEAD~1", "undo", "uncommit (soft reset)"),
    alias("unadd", "reset HEAD", "undo", "unadd (reset HEAD)"),
    alias("discard", "checkout --", "undo", "discard changes in file(s)"),
    // Clean aliases
    alias("cleaner", "clean -dff", "clean", "clean with more powerful options"),
    alias("cleanest", "clean -dffx", "clean", "clean with most powerful options"),
    // Assume aliases
    alias("assume", "update-index --assume-unchanged", "assume", "assume file is unchanged"),
    alias("unassume", "update-index --no-assume-unchanged", "assume", "unassume file"),
    // Inbound & Outbound
    alias("outbound", "log @{upstream}..", "workflow", "show outgoing changes with upstream"),
    // Friendly aliases
    alias("branches", "branch -a", "branch", "list all branches"),
    alias("tags", "tag -n1 --list", "tag", "list all tags"),
    alias("stashes", "stash list", "stash", "list all stashes"),
    // Shell scripting aliases
    alias("top", "rev-parse --show-toplevel", "shell", "show top level directory name"),
    alias("default-branch", "config init.defaultBranch", "shell", "show default branch name"),
    alias("current-branch", "rev-parse --abbrev-ref HEAD", "shell", "show current branch name"),
    // Maintenance aliases
    alias("repacker", "repack -a -d -f --depth=300 --window=300 --window-memory=1g", "maintenance", "repack the way Linus recommends"),
    // Ref aliases
    alias("refs-by-date", "for-each-ref --sort=-committerdate --format='%(committerdate:short) %(refname:short) (objectname:short) %(contents:subject)'", "ref", "sort refs by date"),
    // Topic branch aliases
    alias("topic-begin", "topic-start", "topic", "begin a topic branch (alias for topic-start)"),
    alias("topic-finish", "topic-end", "topic", "finish a topic branch (alias for topic-end)"),
    // Integration aliases
    alias("cvs-i", "cvsimport -k -a", "integration", "CVS import"),
    alias("cvs-e", "cvsexportcommit -u -p", "integration", "CVS export commit"),
    alias("svn-b", "svn branch", "integration", "SVN branch"),
    alias("svn-m", "merge --squash", "integration", "SVN merge squash"),
    alias("svn-c", "svn dcommit", "integration", "SVN dcommit"),
];
