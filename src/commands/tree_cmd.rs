use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{DirId, VirtualTree};

pub struct TreeCommand;

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn summary(&self) -> &'static str {
        "draw the current directory as a tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let lines = build_tree(&ctx.state.tree, ctx.state.cwd);
        CommandResult::success(lines.join("\n"))
    }
}

/// A directory being listed, with how far its children have been emitted.
struct Frame {
    dir: DirId,
    next_subdir: usize,
    prefix_len: usize,
}

fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Subdirectories first, each followed by its own contents, then files.
/// Entries keep insertion order. All frames share one prefix buffer that is
/// cut back to the frame's length before each step.
fn build_tree(tree: &VirtualTree, dir: DirId) -> Vec<String> {
    let mut lines = Vec::new();
    let mut prefix = String::new();
    let mut stack = vec![Frame { dir, next_subdir: 0, prefix_len: 0 }];

    while let Some(frame) = stack.last_mut() {
        prefix.truncate(frame.prefix_len);
        let node = tree.dir(frame.dir);
        let total = node.subdirectories.len() + node.files.len();

        if frame.next_subdir < node.subdirectories.len() {
            let idx = frame.next_subdir;
            frame.next_subdir += 1;
            let child = node.subdirectories[idx];
            let is_last = idx + 1 == total;
            lines.push(format!("{}{}{}", prefix, connector(is_last), tree.dir(child).name));

            prefix.push_str(if is_last { "    " } else { "│   " });
            stack.push(Frame {
                dir: child,
                next_subdir: 0,
                prefix_len: prefix.len(),
            });
            continue;
        }

        let offset = node.subdirectories.len();
        for (idx, file) in node.files.iter().enumerate() {
            let is_last = offset + idx + 1 == total;
            lines.push(format!("{}{}{}", prefix, connector(is_last), file.name));
        }
        stack.pop();
    }
    lines
}
