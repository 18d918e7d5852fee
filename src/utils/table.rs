/// 欄位對齊方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

/// 固定寬度的 ASCII 表格，標題嵌入上框線
///
/// ```text
/// +Title---+-----+
/// | Head   | B   |
/// +--------+-----+
/// | row    | 1   |
/// +--------+-----+
/// ```
#[derive(Debug, Clone)]
pub struct AsciiTable {
    title: Option<String>,
    rows: Vec<Vec<String>>,
    justify: Vec<Justify>,
}

impl AsciiTable {
    /// 第一列視為表頭
    pub fn new(rows: Vec<Vec<String>>, title: Option<String>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            title,
            rows,
            justify: vec![Justify::Left; columns],
        }
    }

    pub fn justify_column(&mut self, column: usize, justify: Justify) {
        if column >= self.justify.len() {
            self.justify.resize(column + 1, Justify::Left);
        }
        self.justify[column] = justify;
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.justify.len()];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn border(widths: &[usize], title: Option<&str>) -> String {
        let mut line = String::from("+");
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push('+');
            }
            line.push_str(&"-".repeat(width + 2));
        }
        line.push('+');

        match title {
            // 標題放得下才嵌入，否則保留原本的框線
            Some(title) if title.chars().count() <= line.chars().count() - 2 => {
                let rest: String = line.chars().skip(1 + title.chars().count()).collect();
                format!("+{}{}", title, rest)
            }
            _ => line,
        }
    }

    fn format_row(&self, row: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width - cell.chars().count();
            let (left, right) = match self.justify[i] {
                Justify::Left => (0, padding),
                Justify::Right => (padding, 0),
                Justify::Center => (padding / 2, padding - padding / 2),
            };
            line.push(' ');
            line.push_str(&" ".repeat(left));
            line.push_str(cell);
            line.push_str(&" ".repeat(right));
            line.push_str(" |");
        }
        line
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator = Self::border(&widths, None);

        let mut lines = vec![Self::border(&widths, self.title.as_deref())];
        for (i, row) in self.rows.iter().enumerate() {
            lines.push(self.format_row(row, &widths));
            if i == 0 && self.rows.len() > 1 {
                lines.push(separator.clone());
            }
        }
        lines.push(separator);
        lines.join("\n")
    }
}

impl std::fmt::Display for AsciiTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
