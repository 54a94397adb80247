mod child_kind;
