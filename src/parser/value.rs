use super::*;

/// 转义字符解析
///
/// 与`str::escape_debug`的输出一致: `\\` `\"` `\'` `\n` `\r` `\t` `\0` `\u{..}`
fn escape(input: &str) -> ParseResult<char> {
    fn unicode(input: &str) -> ParseResult<char> {
        map_opt(preceded(char('u'), delimited(char('{'), hex_digit1, char('}'))), |hex: &str| {
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        })(input)
    }
    alt((
        value('\\', char('\\')),
        value('"', char('"')),
        value('\'', char('\'')),
        value('\n', char('n')),
        value('\r', char('r')),
        value('\t', char('t')),
        value('\0', char('0')),
        unicode
    ))(input)
}

/// 双引号字符串解析
///
/// # Input
///
/// ```txt
/// "say \"hi\"\n"
/// ```
///
/// # Output
///
/// ```txt
/// say "hi"<LF>
/// ```
pub fn string(input: &str) -> ParseResult<String> {
    //NOTE
    //`escaped_transform`在内容为空时失败,需要单独匹配空字符串`""`
    let body = alt((escaped_transform(is_not("\"\\"), '\\', escape), success(String::new())));
    context("string", delimited(char('"'), body, char('"')))(input)
}

/// 单引号字符解析
///
/// # Input
///
/// ```txt
/// '\''
/// ```
pub fn char_literal(input: &str) -> ParseResult<char> {
    let parser = delimited(char('\''), alt((preceded(char('\\'), escape), none_of("\\'"))), char('\''));
    context("char", parser)(input)
}

/// 原样截取值的文本
///
/// 截取到同一层级的`,`或`}`为止,跳过括号和引号内的内容,去掉末尾空白
///
/// # Input
///
/// ```txt
/// Some([1, 2]), "next": 3
/// ```
///
/// # Output
///
/// ```txt
/// Some([1, 2])
/// ```
pub fn raw(input: &str) -> ParseResult<&str> {
    let mut depth = 0usize;
    let mut end = input.len();
    let mut chars = input.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' if depth > 0 => depth -= 1,
            ',' | ')' | ']' | '}' if depth == 0 => {
                end = idx;
                break;
            },
            '"' | '\'' => {
                let mut escaped = false;
                loop {
                    match chars.next() {
                        Some((_, '\\')) if !escaped => escaped = true,
                        Some((_, q)) if q == c && !escaped => break,
                        Some(_) => escaped = false,
                        None => return context("unterminated quote", fail)(&input[idx..])
                    }
                }
            },
            _ => {}
        }
    }
    let text = input[..end].trim_end();
    if text.is_empty() {
        return context("raw value", fail)(input);
    }
    Ok((&input[text.len()..], text))
}
