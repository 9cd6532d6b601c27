//! Navigation and selection logic

use super::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        let display_len = self.display_count();
        if self.selected_index < display_len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let display_len = self.display_count();
        if display_len > 0 {
            self.selected_index = display_len - 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.adjust_scroll_offset();
    }

    /// 过滤或刷新后行数可能变少，把光标拉回有效范围
    pub fn clamp_selection(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
        }
        self.adjust_scroll_offset();
    }

    /// 调整 scroll_offset 确保 selected_index 在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let vh = self.last_visible_height.max(1);
        // 如果光标在可见窗口上方，向上滚动
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        // 如果光标在可见窗口下方，向下滚动
        if self.selected_index >= self.scroll_offset + vh {
            self.scroll_offset = self.selected_index - vh + 1;
        }
    }
}
