//! The computed-style record.
//!
//! One typed field per property. Plain-value fields are written by direct
//! assignment from the per-property cascade routines; the handle-carrying
//! fields go through setters which take the record's own interned references
//! (and release the ones being replaced). [`ComputedStyle::destroy`] releases
//! everything the record still holds; a destroyed record is reusable.

use crate::intern::Interner;
use crate::values::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    pub azimuth: Azimuth,
    pub background_attachment: BackgroundAttachment,
    pub background_color: ColorValue,
    pub background_image: ImageValue,
    pub background_position: BackgroundPosition,
    pub background_repeat: BackgroundRepeat,
    pub border_top_color: ColorValue,
    pub border_right_color: ColorValue,
    pub border_bottom_color: ColorValue,
    pub border_left_color: ColorValue,
    pub border_top_style: BorderStyle,
    pub border_right_style: BorderStyle,
    pub border_bottom_style: BorderStyle,
    pub border_left_style: BorderStyle,
    pub border_top_width: BorderWidth,
    pub border_right_width: BorderWidth,
    pub border_bottom_width: BorderWidth,
    pub border_left_width: BorderWidth,
    pub border_collapse: BorderCollapse,
    pub border_spacing: BorderSpacing,
    pub top: LengthAuto,
    pub right: LengthAuto,
    pub bottom: LengthAuto,
    pub left: LengthAuto,
    pub caption_side: CaptionSide,
    pub clear: Clear,
    pub clip: Clip,
    pub color: ColorValue,
    pub content: Content,
    pub counter_increment: CounterList,
    pub counter_reset: CounterList,
    pub cue_after: ImageValue,
    pub cue_before: ImageValue,
    pub cursor: Cursor,
    pub direction: Direction,
    pub display: Display,
    pub elevation: Elevation,
    pub empty_cells: EmptyCells,
    pub float: Float,
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_style: FontStyle,
    pub font_variant: FontVariant,
    pub font_weight: FontWeight,
    pub height: LengthAuto,
    pub width: LengthAuto,
    pub letter_spacing: LengthNormal,
    pub word_spacing: LengthNormal,
    pub line_height: LineHeight,
    pub list_style_image: ImageValue,
    pub list_style_position: ListStylePosition,
    pub list_style_type: ListStyleType,
    pub margin_top: LengthAuto,
    pub margin_right: LengthAuto,
    pub margin_bottom: LengthAuto,
    pub margin_left: LengthAuto,
    pub max_height: LengthNone,
    pub max_width: LengthNone,
    pub min_height: LengthValue,
    pub min_width: LengthValue,
    pub orphans: NumberValue,
    pub widows: NumberValue,
    pub outline_color: ColorValue,
    pub outline_style: BorderStyle,
    pub outline_width: BorderWidth,
    pub overflow: Overflow,
    pub padding_top: LengthValue,
    pub padding_right: LengthValue,
    pub padding_bottom: LengthValue,
    pub padding_left: LengthValue,
    pub page_break_after: PageBreak,
    pub page_break_before: PageBreak,
    pub page_break_inside: PageBreak,
    pub pause_after: LengthValue,
    pub pause_before: LengthValue,
    pub pitch_range: NumberValue,
    pub pitch: Pitch,
    pub play_during: PlayDuring,
    pub position: Position,
    pub quotes: Quotes,
    pub richness: NumberValue,
    pub speak_header: SpeakHeader,
    pub speak_numeral: SpeakNumeral,
    pub speak_punctuation: SpeakPunctuation,
    pub speak: Speak,
    pub speech_rate: SpeechRate,
    pub stress: NumberValue,
    pub table_layout: TableLayout,
    pub text_align: TextAlign,
    pub text_decoration: TextDecoration,
    pub text_indent: LengthValue,
    pub text_transform: TextTransform,
    pub unicode_bidi: UnicodeBidi,
    pub vertical_align: VerticalAlign,
    pub visibility: Visibility,
    pub voice_family: VoiceFamily,
    pub volume: Volume,
    pub white_space: WhiteSpace,
    pub z_index: ZIndex,
}

macro_rules! handle_setters {
    ($(($setter:ident, $release:ident, $field:ident, $type:ty)),* $(,)?) => {
        $(
            pub fn $setter(&mut self, interner: &Interner, value: $type) {
                value.add_refs(interner);
                self.$field.release(interner);
                self.$field = value;
            }

            fn $release(&mut self, interner: &Interner) {
                self.$field.release(interner);
                self.$field = <$type>::Inherit;
            }
        )*
    };
}

impl ComputedStyle {
    pub fn new() -> ComputedStyle {
        ComputedStyle::default()
    }

    handle_setters! {
        (set_background_image, release_background_image, background_image, ImageValue),
        (set_list_style_image, release_list_style_image, list_style_image, ImageValue),
        (set_cue_after, release_cue_after, cue_after, ImageValue),
        (set_cue_before, release_cue_before, cue_before, ImageValue),
        (set_cursor, release_cursor, cursor, Cursor),
        (set_font_family, release_font_family, font_family, FontFamily),
        (set_voice_family, release_voice_family, voice_family, VoiceFamily),
        (set_quotes, release_quotes, quotes, Quotes),
        (set_content, release_content, content, Content),
        (set_counter_increment, release_counter_increment, counter_increment, CounterList),
        (set_counter_reset, release_counter_reset, counter_reset, CounterList),
        (set_play_during, release_play_during, play_during, PlayDuring),
    }

    /// Release every interned reference the record holds.
    pub fn destroy(&mut self, interner: &Interner) {
        self.release_background_image(interner);
        self.release_list_style_image(interner);
        self.release_cue_after(interner);
        self.release_cue_before(interner);
        self.release_cursor(interner);
        self.release_font_family(interner);
        self.release_voice_family(interner);
        self.release_quotes(interner);
        self.release_content(interner);
        self.release_counter_increment(interner);
        self.release_counter_reset(interner);
        self.release_play_during(interner);
    }
}
